//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod chat_backend;
pub mod transcript_logger;
pub mod user_prompt;
pub mod view_renderer;
