//! Source citation parsing.
//!
//! The backend cites retrieved passages as `"<filename> (Page <n>)"`.
//! Citations in that shape become deep links into the document viewer;
//! anything else is shown as plain text.

use regex::Regex;
use std::sync::LazyLock;

/// Route prefix under which the backend serves source documents.
pub const PDF_ROUTE: &str = "/pdfs/";

static CITATION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.*?) \(Page (\d+)\)").expect("citation pattern is valid"));

/// A parsed source citation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Citation {
    /// Matches `"<filename> (Page <n>)"` and links to that page.
    Linked {
        filename: String,
        page: String,
        label: String,
    },
    /// Anything else; rendered without a link.
    Plain { text: String },
}

impl Citation {
    /// Parse a raw citation string.
    ///
    /// Never fails: unrecognized input becomes [`Citation::Plain`].
    /// The page is kept as the matched digit run so very large numbers
    /// survive unchanged into the link.
    pub fn parse(raw: &str) -> Self {
        match CITATION_PATTERN.captures(raw) {
            Some(caps) => Citation::Linked {
                filename: caps[1].to_string(),
                page: caps[2].to_string(),
                label: raw.to_string(),
            },
            None => Citation::Plain {
                text: raw.to_string(),
            },
        }
    }

    /// Site-relative link target, `None` for plain citations.
    pub fn href(&self) -> Option<String> {
        match self {
            Citation::Linked { filename, page, .. } => {
                Some(format!("{}{}#page={}", PDF_ROUTE, filename, page))
            }
            Citation::Plain { .. } => None,
        }
    }

    /// The original citation text, used as the display label.
    pub fn label(&self) -> &str {
        match self {
            Citation::Linked { label, .. } => label,
            Citation::Plain { text } => text,
        }
    }

    pub fn is_linked(&self) -> bool {
        matches!(self, Citation::Linked { .. })
    }
}
