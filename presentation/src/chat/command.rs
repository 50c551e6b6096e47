//! Parsing of REPL input lines.

use std::path::PathBuf;

/// One line of REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Plain text, or a line escaped with `//`: send it as a chat message.
    Send(String),
    /// `/sessions`: refresh the directory
    Sessions,
    /// `/open <n|id>`: load a session by directory index or id
    Open(String),
    /// `/new`: start a new conversation
    New,
    /// `/clear`: delete all history
    Clear,
    /// `/export <path>`: write an HTML snapshot
    Export(PathBuf),
    /// `/help`
    Help,
    /// `/quit`
    Quit,
    /// A slash command that could not be understood; carries the reason.
    Invalid(String),
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        // `//text` sends `/text` verbatim
        if let Some(text) = line.strip_prefix("//") {
            return ReplCommand::Send(format!("/{}", text));
        }
        let Some(rest) = line.strip_prefix('/') else {
            return ReplCommand::Send(line.to_string());
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match (name, arg) {
            ("sessions" | "s", _) => ReplCommand::Sessions,
            ("open" | "o", "") => ReplCommand::Invalid("Usage: /open <number|session-id>".into()),
            ("open" | "o", target) => ReplCommand::Open(target.to_string()),
            ("new" | "n", _) => ReplCommand::New,
            ("clear", _) => ReplCommand::Clear,
            ("export", "") => ReplCommand::Invalid("Usage: /export <path>".into()),
            ("export", path) => ReplCommand::Export(PathBuf::from(path)),
            ("help" | "h" | "?", _) => ReplCommand::Help,
            ("quit" | "exit" | "q", _) => ReplCommand::Quit,
            (other, _) => ReplCommand::Invalid(format!("Unknown command: /{}", other)),
        }
    }
}
