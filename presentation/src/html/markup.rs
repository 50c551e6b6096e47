//! Markup rules for message text and citations.
//!
//! Message text is untrusted. It is HTML-escaped first; only then are the
//! two supported transforms applied: `**x**` becomes `<strong>x</strong>`
//! and a newline becomes `<br>`.

use regex::Regex;
use std::sync::LazyLock;
use tutor_domain::Citation;

static BOLD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));

/// Escape text for use in HTML content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render message text as HTML.
pub fn format_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let escaped = escape_html(text);
    BOLD_PATTERN
        .replace_all(&escaped, "<strong>$1</strong>")
        .replace('\n', "<br>")
}

/// Render one citation chip.
pub fn citation_html(raw: &str) -> String {
    let citation = Citation::parse(raw);
    let label = escape_html(citation.label());
    match citation.href() {
        Some(href) => format!(
            r#"<a href="{}" target="_blank" class="source-chip">{}</a>"#,
            escape_html(&href),
            label
        ),
        None => format!(r#"<span class="source-chip">{}</span>"#, label),
    }
}

/// Render the "Sources:" block, or nothing when there are no sources.
pub fn sources_html(sources: &[String]) -> String {
    if sources.is_empty() {
        return String::new();
    }
    let chips: String = sources.iter().map(|s| citation_html(s)).collect();
    format!(
        r#"<div class="sources-container"><div class="sources-label">Sources:</div><div class="sources-list">{}</div></div>"#,
        chips
    )
}
