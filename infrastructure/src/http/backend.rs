//! HTTP adapter for the chat backend.
//!
//! Talks JSON to the tutoring service:
//!
//! | Operation | Request |
//! |-----------|---------|
//! | list sessions | `GET /sessions` |
//! | fetch history | `GET /history/{session_id}` |
//! | clear history | `DELETE /history` |
//! | send message | `POST /chat` |
//!
//! No request timeout is configured: a hung request keeps its loading
//! placeholder until the server answers or the connection drops.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, trace, warn};
use tutor_application::ports::chat_backend::{
    BackendError, ChatBackend, ChatOutcome, ChatReply, ChatRequest,
};
use tutor_domain::{Message, Session, SessionId};

const USER_AGENT: &str = concat!("tutor-chat/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct SessionsResponse {
    sessions: Vec<SessionRow>,
}

/// Session row as sent by the server; the id is checked after decoding.
#[derive(Debug, Deserialize)]
struct SessionRow {
    id: String,
    title: String,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    messages: Vec<Message>,
}

/// [`ChatBackend`] over HTTP/JSON.
pub struct HttpChatBackend {
    client: Client,
    base_url: Url,
}

impl HttpChatBackend {
    /// Create a backend rooted at `base_url` (e.g. `http://127.0.0.1:8000`).
    pub fn new(base_url: &str) -> Result<Self, BackendError> {
        let base_url =
            Url::parse(base_url).map_err(|e| BackendError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(BackendError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(transport_error)?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint below the base URL.
    ///
    /// Each segment is percent-encoded, so a session id can never escape
    /// its path segment.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, BackendError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| BackendError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn read(&self, response: reqwest::Response) -> Result<(StatusCode, Vec<u8>), BackendError> {
        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;
        trace!("HTTP {} ({} bytes)", status, body.len());
        Ok((status, body.to_vec()))
    }
}

#[async_trait]
impl ChatBackend for HttpChatBackend {
    async fn list_sessions(&self) -> Result<Vec<Session>, BackendError> {
        let url = self.endpoint(&["sessions"])?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(transport_error)?;
        let (status, body) = self.read(response).await?;
        decode_sessions(status, &body)
    }

    async fn fetch_history(&self, session_id: &SessionId) -> Result<Vec<Message>, BackendError> {
        let url = self.endpoint(&["history", session_id.as_str()])?;
        debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(transport_error)?;
        let (status, body) = self.read(response).await?;
        decode_history(status, &body)
    }

    async fn clear_history(&self) -> Result<(), BackendError> {
        let url = self.endpoint(&["history"])?;
        debug!("DELETE {}", url);
        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response.status())
    }

    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatOutcome, BackendError> {
        let url = self.endpoint(&["chat"])?;
        debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(transport_error)?;
        let (status, body) = self.read(response).await?;
        decode_chat(status, &body)
    }
}

fn transport_error(e: reqwest::Error) -> BackendError {
    BackendError::Connection(e.to_string())
}

fn decode_error(e: serde_json::Error) -> BackendError {
    BackendError::Decode(e.to_string())
}

fn check_status(status: StatusCode) -> Result<(), BackendError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(BackendError::Status {
            status: status.as_u16(),
        })
    }
}

/// Decode a `GET /sessions` response.
///
/// Rows with a blank id cannot be opened and are skipped.
pub fn decode_sessions(status: StatusCode, body: &[u8]) -> Result<Vec<Session>, BackendError> {
    check_status(status)?;
    let parsed: SessionsResponse = serde_json::from_slice(body).map_err(decode_error)?;
    Ok(parsed
        .sessions
        .into_iter()
        .filter_map(|row| match SessionId::new(row.id) {
            Ok(id) => Some(Session::new(id, row.title)),
            Err(e) => {
                warn!("Skipping session '{}': {}", row.title, e);
                None
            }
        })
        .collect())
}

/// Decode a `GET /history/{id}` response.
pub fn decode_history(status: StatusCode, body: &[u8]) -> Result<Vec<Message>, BackendError> {
    check_status(status)?;
    let parsed: HistoryResponse = serde_json::from_slice(body).map_err(decode_error)?;
    Ok(parsed.messages)
}

/// Decode a `POST /chat` response.
///
/// The body is parsed before the status is looked at: an error status with
/// a JSON body is a handled rejection, an unparseable body is a failure
/// whatever the status.
pub fn decode_chat(status: StatusCode, body: &[u8]) -> Result<ChatOutcome, BackendError> {
    if status.is_success() {
        let reply: ChatReply = serde_json::from_slice(body).map_err(decode_error)?;
        return Ok(ChatOutcome::Reply(reply));
    }

    serde_json::from_slice::<serde_json::Value>(body).map_err(decode_error)?;
    Ok(ChatOutcome::Rejected {
        status: status.as_u16(),
    })
}
