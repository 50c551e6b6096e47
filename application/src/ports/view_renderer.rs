//! View renderer port
//!
//! The display surface the controller drives. Implementations own their
//! own state (rendered messages, directory rows, placeholders) and are
//! shared behind an `Arc`, so every method takes `&self`.

use tutor_domain::{LoadingId, Message, SessionEntry};

/// Display surface for the conversation and the session directory.
///
/// # Implementations
///
/// - **Console**: `ConsoleView` in the presentation layer
/// - **HTML page model**: `HtmlView` in the presentation layer
pub trait ViewRenderer: Send + Sync {
    /// Append one message to the end of the conversation and scroll to it.
    fn render_message(&self, message: &Message);

    /// Replace the whole directory with `entries`.
    fn render_session_list(&self, entries: &[SessionEntry]);

    /// Append a "Thinking..." placeholder identified by `id`.
    fn show_loading(&self, id: &LoadingId);

    /// Remove the placeholder `id`. No-op if it is already gone.
    fn hide_loading(&self, id: &LoadingId);

    /// Remove the first placeholder whose id starts with `prefix`.
    fn remove_loading_with_prefix(&self, prefix: &str);

    /// Show or hide the welcome screen.
    fn set_welcome_visible(&self, visible: bool);

    /// Remove every rendered message, placeholders included.
    fn clear_messages(&self);

    /// Drop the "active" styling from every directory row.
    fn clear_active_marks(&self);

    /// Empty the input field.
    fn clear_input(&self) {}

    /// Return the surface to its freshly-loaded state.
    fn reload(&self);
}
