//! Domain layer for tutor-chat
//!
//! This crate contains the core entities and pure logic of the chat client.
//! It has no dependencies on networking, configuration or rendering.
//!
//! # Core Concepts
//!
//! ## Sessions
//!
//! A **session** is a conversation tracked by the backend. The client lists
//! sessions in a directory and marks at most one of them as active.
//!
//! ## Messages and Citations
//!
//! A **message** exists only in the rendered view. Assistant replies may carry
//! **citations** (`"<file> (Page <n>)"`) that link into the document viewer.

pub mod core;
pub mod message;
pub mod session;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use message::{
    citation::{Citation, PDF_ROUTE},
    entities::{Message, Role},
    loading::{LOADING_PREFIX, LoadingId},
};
pub use session::entities::{Session, SessionEntry, SessionId};
