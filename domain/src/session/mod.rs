//! Chat session domain.
//!
//! - [`entities::SessionId`]: opaque server-assigned identifier
//! - [`entities::Session`]: a server-tracked conversation
//! - [`entities::SessionEntry`]: a rendered directory row

pub mod entities;
