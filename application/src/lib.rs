//! Application layer for tutor-chat
//!
//! This crate contains the session controller and the port definitions it
//! drives. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    chat_backend::{BackendError, ChatBackend, ChatOutcome, ChatReply, ChatRequest},
    transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger},
    user_prompt::{FixedPrompt, UserPrompt},
    view_renderer::ViewRenderer,
};
pub use use_cases::chat_session::{
    CHAT_FAILED_MESSAGE, CHAT_REJECTED_MESSAGE, CLEAR_CONFIRMATION, CLEAR_FAILED_ALERT,
    ChatSessionController, ClearOutcome, SendOutcome,
};
