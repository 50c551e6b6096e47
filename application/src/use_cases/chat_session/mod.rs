//! Chat session controller.
//!
//! Keeps the local view of "the current session" consistent with the
//! backend's sessions and histories across the three user actions:
//!
//! - **Session Directory** ([`directory`]): list sessions, clear history
//! - **Conversation View** ([`conversation`]): switch session, render messages
//! - **Message Dispatcher** ([`dispatcher`]): send input, adopt new sessions
//!
//! The only state shared between them is the active session id. Actions
//! are not serialized against each other: a `load_chat` issued while a
//! `send_message` is in flight may interleave its view updates with the
//! send's, and whichever finishes last decides the active session.

mod conversation;
mod directory;
mod dispatcher;
#[cfg(test)]
mod testing;

pub use directory::{CLEAR_CONFIRMATION, CLEAR_FAILED_ALERT, ClearOutcome};
pub use dispatcher::{CHAT_FAILED_MESSAGE, CHAT_REJECTED_MESSAGE, SendOutcome};

use crate::ports::chat_backend::ChatBackend;
use crate::ports::transcript_logger::{NoTranscriptLogger, TranscriptLogger};
use crate::ports::user_prompt::UserPrompt;
use crate::ports::view_renderer::ViewRenderer;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;
use tutor_domain::SessionId;

/// Controller for one chat page.
///
/// Constructed once per run. Holds the active session id explicitly
/// instead of as ambient global state.
pub struct ChatSessionController {
    backend: Arc<dyn ChatBackend>,
    view: Arc<dyn ViewRenderer>,
    prompt: Arc<dyn UserPrompt>,
    transcript: Arc<dyn TranscriptLogger>,
    active: Mutex<Option<SessionId>>,
}

impl ChatSessionController {
    pub fn new(
        backend: Arc<dyn ChatBackend>,
        view: Arc<dyn ViewRenderer>,
        prompt: Arc<dyn UserPrompt>,
    ) -> Self {
        Self {
            backend,
            view,
            prompt,
            transcript: Arc::new(NoTranscriptLogger),
            active: Mutex::new(None),
        }
    }

    /// Create with a transcript logger.
    pub fn with_transcript_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = logger;
        self
    }

    /// The session whose messages are currently rendered, if any.
    pub fn active(&self) -> Option<SessionId> {
        self.active
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the active session. Last write wins.
    pub fn set_active(&self, session_id: Option<SessionId>) {
        debug!("Active session -> {:?}", session_id.as_ref().map(|s| s.as_str()));
        *self.active.lock().unwrap_or_else(PoisonError::into_inner) = session_id;
    }
}
