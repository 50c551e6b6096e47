//! Presentation layer for tutor-chat
//!
//! This crate contains CLI definitions, the console and HTML renderers,
//! terminal prompts and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod console;
pub mod html;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand, write_snapshot};
pub use cli::commands::Cli;
pub use console::{ConsolePrompt, ConsoleView};
pub use html::HtmlView;
