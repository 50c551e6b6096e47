//! Chat backend port
//!
//! Defines the interface for talking to the chat/history service.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tutor_domain::{Message, Session, SessionId};

/// Errors that can occur during backend operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl BackendError {
    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

/// Body of `POST /chat`.
///
/// A missing `session_id` asks the backend to start a new session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, session_id: Option<SessionId>) -> Self {
        Self {
            message: message.into(),
            session_id,
        }
    }
}

/// Successful `POST /chat` response.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub new_session: bool,
    #[serde(default)]
    pub session_id: Option<String>,
}

impl ChatReply {
    /// The session created by this exchange, if the backend created one.
    pub fn created_session(&self) -> Option<SessionId> {
        if !self.new_session {
            return None;
        }
        self.session_id
            .as_deref()
            .and_then(|id| SessionId::new(id).ok())
    }
}

/// Result of a chat exchange that reached the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// 2xx with a decodable reply.
    Reply(ChatReply),
    /// Non-2xx status whose body was still valid JSON.
    Rejected { status: u16 },
}

/// Backend for sessions, histories and chat
///
/// This port defines how the controller reaches the chat service.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// `GET /sessions`
    async fn list_sessions(&self) -> Result<Vec<Session>, BackendError>;

    /// `GET /history/{id}`, oldest message first.
    async fn fetch_history(&self, session_id: &SessionId) -> Result<Vec<Message>, BackendError>;

    /// `DELETE /history`
    async fn clear_history(&self) -> Result<(), BackendError>;

    /// `POST /chat`
    ///
    /// Transport failures and undecodable bodies are `Err`; a non-2xx
    /// answer with a JSON body is `Ok(ChatOutcome::Rejected)`.
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatOutcome, BackendError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_missing_session() {
        let body = serde_json::to_value(ChatRequest::new("Hello", None)).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Hello" }));
    }

    #[test]
    fn test_request_includes_active_session() {
        let id = SessionId::new("s1").unwrap();
        let body = serde_json::to_value(ChatRequest::new("Hi", Some(id))).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Hi", "session_id": "s1" }));
    }

    #[test]
    fn test_reply_defaults() {
        let reply: ChatReply = serde_json::from_str(r#"{"response": "ok"}"#).unwrap();
        assert_eq!(reply.response, "ok");
        assert!(reply.sources.is_empty());
        assert!(!reply.new_session);
        assert_eq!(reply.created_session(), None);
    }

    #[test]
    fn test_created_session_requires_flag_and_id() {
        let reply: ChatReply = serde_json::from_str(
            r#"{"response": "Hi there", "new_session": true, "session_id": "s1"}"#,
        )
        .unwrap();
        assert_eq!(reply.created_session(), Some(SessionId::new("s1").unwrap()));

        let reply: ChatReply =
            serde_json::from_str(r#"{"response": "x", "new_session": false, "session_id": "s1"}"#)
                .unwrap();
        assert_eq!(reply.created_session(), None);

        let reply: ChatReply =
            serde_json::from_str(r#"{"response": "x", "new_session": true}"#).unwrap();
        assert_eq!(reply.created_session(), None);
    }

    #[test]
    fn test_status_error_display() {
        let err = BackendError::Status { status: 404 };
        assert_eq!(err.to_string(), "HTTP error! status: 404");
        assert_eq!(err.status(), Some(404));
        assert_eq!(BackendError::Connection("refused".into()).status(), None);
    }
}
