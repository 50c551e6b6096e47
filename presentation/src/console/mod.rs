//! Console rendering and prompts.

pub mod prompt;
pub mod view;

pub use prompt::ConsolePrompt;
pub use view::ConsoleView;
