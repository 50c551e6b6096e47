//! Conversation View: switching sessions and rendering messages.

use super::ChatSessionController;
use crate::ports::chat_backend::BackendError;
use crate::ports::transcript_logger::TranscriptEvent;
use serde_json::json;
use tracing::{error, info};
use tutor_domain::{LOADING_PREFIX, LoadingId, Message, Role, SessionId};

impl ChatSessionController {
    /// Make `session_id` the active session and render its history.
    ///
    /// The directory row for the new session is not re-marked here; marks
    /// are only cleared, and come back on the next directory refresh.
    /// Refreshing the directory from here could race with other
    /// directory updates.
    ///
    /// History is rendered without citations; the backend does not keep
    /// them. On failure the user gets a blocking alert and any leftover
    /// placeholder is removed. Returns the number of messages rendered.
    pub async fn load_chat(&self, session_id: SessionId) -> Result<usize, BackendError> {
        info!("Loading chat: {}", session_id);
        self.set_active(Some(session_id.clone()));

        self.view.set_welcome_visible(false);
        self.view.clear_messages();
        let loading = self.add_loading_indicator();
        self.view.clear_active_marks();

        match self.backend.fetch_history(&session_id).await {
            Ok(messages) => {
                info!("Chat history loaded, messages: {}", messages.len());
                self.view.hide_loading(&loading);

                for message in &messages {
                    self.add_message(&message.content, message.role, &[]);
                }

                self.transcript.log(TranscriptEvent::new(
                    "session_switched",
                    json!({
                        "session_id": session_id.as_str(),
                        "messages": messages.len(),
                    }),
                ));
                Ok(messages.len())
            }
            Err(e) => {
                error!("Error loading chat: {}", e);
                self.prompt.alert(&format!("Error loading chat: {}", e));
                self.view.remove_loading_with_prefix(LOADING_PREFIX);
                Err(e)
            }
        }
    }

    /// Append one message to the conversation.
    pub fn add_message(&self, content: &str, role: Role, sources: &[String]) {
        let message = Message {
            role,
            content: content.to_string(),
            sources: sources.to_vec(),
        };
        self.view.render_message(&message);
    }

    /// Append a "Thinking..." placeholder and return its id for removal.
    pub fn add_loading_indicator(&self) -> LoadingId {
        let id = LoadingId::now();
        self.view.show_loading(&id);
        id
    }

    /// Leave the current session and show the welcome screen.
    ///
    /// The next message sent starts a new session.
    pub fn start_new_chat(&self) {
        info!("Starting new chat");
        self.set_active(None);
        self.view.clear_messages();
        self.view.clear_active_marks();
        self.view.set_welcome_visible(true);
    }
}
