//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for tutor-chat
#[derive(Parser, Debug)]
#[command(name = "tutor-chat")]
#[command(author, version, about = "Chat with your course material from the terminal")]
#[command(long_about = r#"
tutor-chat talks to a tutoring backend that answers questions from your
course documents and cites the pages it used.

Without a MESSAGE an interactive session starts. Conversations are kept by
the backend; use /sessions and /open to return to earlier ones.

Configuration files are loaded from (in priority order):
1. TUTOR_CHAT_* environment variables (e.g. TUTOR_CHAT_SERVER__BASE_URL)
2. --config <path>       Explicit config file
3. ./tutor-chat.toml     Project-level config
4. ~/.config/tutor-chat/config.toml   Global config

Example:
  tutor-chat
  tutor-chat "Explain the second law of thermodynamics"
  tutor-chat --server http://10.0.0.5:8000 --export-html chat.html "Summarize chapter 2"
"#)]
pub struct Cli {
    /// Send a single message and exit
    pub message: Option<String>,

    /// Backend base URL (overrides configuration)
    #[arg(short, long, value_name = "URL")]
    pub server: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append a JSONL transcript of the conversation to this file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Write an HTML snapshot of the chat page before exiting
    #[arg(long, value_name = "PATH")]
    pub export_html: Option<PathBuf>,

    /// Write diagnostic logs to stderr instead of the log file
    #[arg(long)]
    pub log_stderr: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
