//! HTML rendering: markup rules and the page model.

pub mod markup;
pub mod page;

pub use markup::{citation_html, escape_html, format_text, sources_html};
pub use page::HtmlView;
