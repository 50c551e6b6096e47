//! Conversation message domain.
//!
//! - [`entities::Message`] / [`entities::Role`]: a rendered chat message
//! - [`citation::Citation`]: parsed source citation
//! - [`loading::LoadingId`]: identifier of a transient loading placeholder

pub mod citation;
pub mod entities;
pub mod loading;
