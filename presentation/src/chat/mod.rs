//! Interactive chat mode.

mod command;
mod repl;

pub use command::ReplCommand;
pub use repl::{ChatRepl, write_snapshot};
