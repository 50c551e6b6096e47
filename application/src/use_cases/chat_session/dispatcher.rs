//! Message Dispatcher: sending user input and adopting new sessions.

use super::ChatSessionController;
use crate::ports::chat_backend::{ChatOutcome, ChatRequest};
use crate::ports::transcript_logger::TranscriptEvent;
use serde_json::json;
use tracing::{debug, error, info, warn};
use tutor_domain::{Role, SessionId};

/// Assistant message shown when the backend answers with an error status.
pub const CHAT_REJECTED_MESSAGE: &str = "Error: Could not get response.";

/// Assistant message shown when the request fails outright.
pub const CHAT_FAILED_MESSAGE: &str = "Sorry, something went wrong.";

/// Which path `send_message` took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Input was empty after trimming; nothing rendered, nothing sent.
    Ignored,
    /// The assistant replied. Carries the session created by this
    /// exchange, if any.
    Replied { new_session: Option<SessionId> },
    /// The backend answered with a non-2xx status.
    Rejected { status: u16 },
    /// Transport or decoding failure.
    Failed,
}

impl ChatSessionController {
    /// Send `input` to the backend and render the exchange.
    ///
    /// The user's message is rendered before the request goes out and is
    /// never taken back; failures only show up as an assistant message.
    /// When the backend reports a newly created session it becomes the
    /// active one and the directory is refreshed.
    pub async fn send_message(&self, input: &str) -> SendOutcome {
        let text = input.trim();
        if text.is_empty() {
            return SendOutcome::Ignored;
        }

        self.view.set_welcome_visible(false);
        self.add_message(text, Role::User, &[]);
        self.view.clear_input();
        let loading = self.add_loading_indicator();

        let request = ChatRequest::new(text, self.active());
        debug!(
            "Sending chat message (session: {:?})",
            request.session_id.as_ref().map(|s| s.as_str())
        );
        self.transcript.log(TranscriptEvent::new(
            "message_sent",
            json!({
                "session_id": request.session_id.as_ref().map(|s| s.as_str()),
                "content": text,
            }),
        ));

        match self.backend.send_chat(&request).await {
            Ok(ChatOutcome::Reply(reply)) => {
                self.view.hide_loading(&loading);
                self.add_message(&reply.response, Role::Assistant, &reply.sources);
                self.transcript.log(TranscriptEvent::new(
                    "reply_received",
                    json!({
                        "session_id": reply.session_id,
                        "new_session": reply.new_session,
                        "content": reply.response,
                        "sources": reply.sources,
                    }),
                ));

                let new_session = reply.created_session();
                if let Some(ref id) = new_session {
                    info!("New session created: {}", id);
                    self.set_active(Some(id.clone()));
                    self.load_sessions().await;
                } else if reply.new_session {
                    warn!("Backend reported a new session without a usable session_id");
                    self.load_sessions().await;
                }

                SendOutcome::Replied { new_session }
            }
            Ok(ChatOutcome::Rejected { status }) => {
                warn!("Chat request rejected with status {}", status);
                self.view.hide_loading(&loading);
                self.add_message(CHAT_REJECTED_MESSAGE, Role::Assistant, &[]);
                self.transcript.log(TranscriptEvent::new(
                    "send_failed",
                    json!({ "status": status }),
                ));
                SendOutcome::Rejected { status }
            }
            Err(e) => {
                error!("Error: {}", e);
                self.view.hide_loading(&loading);
                self.add_message(CHAT_FAILED_MESSAGE, Role::Assistant, &[]);
                self.transcript.log(TranscriptEvent::new(
                    "send_failed",
                    json!({ "error": e.to_string() }),
                ));
                SendOutcome::Failed
            }
        }
    }
}
