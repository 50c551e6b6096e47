//! HTTP adapters.

mod backend;

pub use backend::{HttpChatBackend, decode_chat, decode_history, decode_sessions};
