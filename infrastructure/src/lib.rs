//! Infrastructure layer for tutor-chat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileConfig};
pub use http::HttpChatBackend;
pub use logging::JsonlTranscriptLogger;
