//! In-memory model of the chat page.
//!
//! Mirrors the structure of the browser page: a sidebar with the session
//! directory, a welcome screen, the message list and the input field.
//! [`HtmlView::to_html`] serializes the current state as a standalone
//! HTML document.

use super::markup::{escape_html, format_text, sources_html};
use std::sync::{Mutex, PoisonError};
use tutor_application::ViewRenderer;
use tutor_domain::{LoadingId, Message, Role, SessionEntry};

#[derive(Debug, Clone)]
enum Node {
    Message { role: Role, html: String },
    Loading { id: LoadingId },
}

#[derive(Debug)]
struct Page {
    nodes: Vec<Node>,
    directory: Vec<SessionEntry>,
    welcome_visible: bool,
    input: String,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            directory: Vec::new(),
            welcome_visible: true,
            input: String::new(),
        }
    }
}

/// HTML page model implementing [`ViewRenderer`].
#[derive(Default)]
pub struct HtmlView {
    page: Mutex<Page>,
}

impl HtmlView {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_page<T>(&self, f: impl FnOnce(&mut Page) -> T) -> T {
        let mut page = self.page.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut page)
    }

    /// Render one message element.
    pub fn message_html(message: &Message) -> String {
        format!(
            r#"<div class="message {}"><div class="message-inner"><div class="bubble"><div class="text">{}</div>{}</div></div></div>"#,
            message.role,
            format_text(&message.content),
            sources_html(&message.sources)
        )
    }

    fn loading_html(id: &LoadingId) -> String {
        format!(
            r#"<div class="message assistant" id="{}"><div class="message-inner"><div class="bubble"><div class="text">Thinking...</div></div></div></div>"#,
            escape_html(id.as_str())
        )
    }

    fn entry_html(entry: &SessionEntry) -> String {
        let class = if entry.active {
            "history-item active"
        } else {
            "history-item"
        };
        format!(
            r#"<div class="{}" data-session-id="{}"><span class="text">{}</span></div>"#,
            class,
            escape_html(entry.session.id.as_str()),
            escape_html(&entry.session.title)
        )
    }

    /// Set the input field's content.
    pub fn set_input(&self, text: &str) {
        self.with_page(|p| p.input = text.to_string());
    }

    pub fn input(&self) -> String {
        self.with_page(|p| p.input.clone())
    }

    /// Rendered message elements, oldest first. Placeholders excluded.
    pub fn message_elements(&self) -> Vec<String> {
        self.with_page(|p| {
            p.nodes
                .iter()
                .filter_map(|n| match n {
                    Node::Message { html, .. } => Some(html.clone()),
                    Node::Loading { .. } => None,
                })
                .collect()
        })
    }

    /// Roles of the rendered messages, oldest first.
    pub fn message_roles(&self) -> Vec<Role> {
        self.with_page(|p| {
            p.nodes
                .iter()
                .filter_map(|n| match n {
                    Node::Message { role, .. } => Some(*role),
                    Node::Loading { .. } => None,
                })
                .collect()
        })
    }

    /// Ids of the placeholders currently on the page.
    pub fn loading_ids(&self) -> Vec<String> {
        self.with_page(|p| {
            p.nodes
                .iter()
                .filter_map(|n| match n {
                    Node::Loading { id } => Some(id.to_string()),
                    Node::Message { .. } => None,
                })
                .collect()
        })
    }

    pub fn directory(&self) -> Vec<SessionEntry> {
        self.with_page(|p| p.directory.clone())
    }

    pub fn welcome_visible(&self) -> bool {
        self.with_page(|p| p.welcome_visible)
    }

    /// Serialize the page as a standalone HTML document.
    pub fn to_html(&self) -> String {
        self.with_page(|p| {
            let history: String = p.directory.iter().map(Self::entry_html).collect();
            let messages: String = p
                .nodes
                .iter()
                .map(|n| match n {
                    Node::Message { html, .. } => html.clone(),
                    Node::Loading { id } => Self::loading_html(id),
                })
                .collect();
            let welcome_style = if p.welcome_visible {
                ""
            } else {
                r#" style="display: none""#
            };

            format!(
                concat!(
                    "<!DOCTYPE html>\n",
                    "<html lang=\"en\">\n",
                    "<head><meta charset=\"utf-8\"><title>Tutor Chat</title></head>\n",
                    "<body>\n",
                    "<aside class=\"sidebar\"><div id=\"history-list\">{}</div></aside>\n",
                    "<main>\n",
                    "<div id=\"welcome-screen\"{}><h1>How can I help you study today?</h1></div>\n",
                    "<div id=\"chat-messages\">{}</div>\n",
                    "<input id=\"user-input\" type=\"text\" value=\"{}\">\n",
                    "</main>\n",
                    "</body>\n",
                    "</html>\n"
                ),
                history,
                welcome_style,
                messages,
                escape_html(&p.input)
            )
        })
    }
}

impl ViewRenderer for HtmlView {
    fn render_message(&self, message: &Message) {
        let html = Self::message_html(message);
        self.with_page(|p| {
            p.nodes.push(Node::Message {
                role: message.role,
                html,
            })
        });
    }

    fn render_session_list(&self, entries: &[SessionEntry]) {
        self.with_page(|p| p.directory = entries.to_vec());
    }

    fn show_loading(&self, id: &LoadingId) {
        self.with_page(|p| p.nodes.push(Node::Loading { id: id.clone() }));
    }

    fn hide_loading(&self, id: &LoadingId) {
        self.with_page(|p| {
            p.nodes
                .retain(|n| !matches!(n, Node::Loading { id: existing } if existing == id))
        });
    }

    fn remove_loading_with_prefix(&self, prefix: &str) {
        self.with_page(|p| {
            if let Some(pos) = p.nodes.iter().position(
                |n| matches!(n, Node::Loading { id } if id.as_str().starts_with(prefix)),
            ) {
                p.nodes.remove(pos);
            }
        });
    }

    fn set_welcome_visible(&self, visible: bool) {
        self.with_page(|p| p.welcome_visible = visible);
    }

    fn clear_messages(&self) {
        self.with_page(|p| p.nodes.clear());
    }

    fn clear_active_marks(&self) {
        self.with_page(|p| {
            for entry in &mut p.directory {
                entry.active = false;
            }
        });
    }

    fn clear_input(&self) {
        self.with_page(|p| p.input.clear());
    }

    fn reload(&self) {
        self.with_page(|p| {
            let directory = std::mem::take(&mut p.directory);
            *p = Page::default();
            p.directory = directory
                .into_iter()
                .map(|mut entry| {
                    entry.active = false;
                    entry
                })
                .collect();
        });
    }
}
