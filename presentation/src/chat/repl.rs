//! REPL (Read-Eval-Print Loop) for interactive chat

use super::command::ReplCommand;
use crate::console::ConsoleView;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};
use tutor_application::{ChatSessionController, ViewRenderer};
use tutor_domain::SessionId;

const HISTORY_SIZE: usize = 500;

/// Interactive chat REPL
pub struct ChatRepl {
    controller: ChatSessionController,
    view: Arc<ConsoleView>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    ///
    /// `view` must be the renderer `controller` was built with; the REPL
    /// reads the directory and the page snapshot from it.
    pub fn new(controller: ChatSessionController, view: Arc<ConsoleView>) -> Self {
        Self { controller, view }
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        let history_path = dirs::data_dir().map(|p| p.join("tutor-chat").join("history.txt"));
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match FileBackedHistory::with_file(HISTORY_SIZE, path.clone()) {
                Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
                Err(e) => warn!("Input history disabled: {}", e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("tutor".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.view.set_welcome_visible(true);
        self.controller.load_sessions().await;

        loop {
            match line_editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => {
                    if !self.handle_line(&line).await {
                        break;
                    }
                }
                Ok(Signal::CtrlD) => {
                    println!("Bye!");
                    break;
                }
                Ok(_) => {
                    // Ctrl-C drops the current line
                    continue;
                }
                Err(e) => {
                    eprintln!("Error: {:?}", e);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Handle one line of input. Returns false if the REPL should exit.
    pub async fn handle_line(&self, line: &str) -> bool {
        let command = ReplCommand::parse(line);
        debug!("REPL command: {:?}", command);

        match command {
            ReplCommand::Send(text) => {
                self.controller.send_message(&text).await;
            }
            ReplCommand::Sessions => self.controller.load_sessions().await,
            ReplCommand::Open(target) => match self.resolve_session(&target) {
                Some(id) => {
                    let _ = self.controller.load_chat(id).await;
                }
                None => println!("{} {}", "No such session:".red(), target),
            },
            ReplCommand::New => self.controller.start_new_chat(),
            ReplCommand::Clear => {
                self.controller.clear_history().await;
            }
            ReplCommand::Export(path) => self.export(&path),
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Quit => {
                println!("Bye!");
                return false;
            }
            ReplCommand::Invalid(reason) => println!("{}", reason.yellow()),
        }
        true
    }

    /// A number picks a directory row (as printed); anything else is taken
    /// as a session id.
    fn resolve_session(&self, target: &str) -> Option<SessionId> {
        match target.parse::<usize>() {
            Ok(index) => self.view.session_at(index),
            Err(_) => SessionId::new(target).ok(),
        }
    }

    fn export(&self, path: &Path) {
        match write_snapshot(&self.view, path) {
            Ok(()) => println!("{} {}", "Exported chat to".green(), path.display()),
            Err(e) => println!("{} {}", "Export failed:".red(), e),
        }
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /sessions, /s       - Refresh the session list");
        println!("  /open <n|id>, /o    - Open a session by list number or id");
        println!("  /new, /n            - Start a new conversation");
        println!("  /clear              - Delete all chat history");
        println!("  /export <path>      - Save the chat page as HTML");
        println!("  /help, /h, /?       - Show this help");
        println!("  /quit, /exit, /q    - Exit");
        println!();
        println!("Anything else is sent to the tutor. Start a line with // to send");
        println!("text that begins with a slash (//etc/hosts sends /etc/hosts).");
        println!();
    }
}

/// Write the HTML snapshot of `view`'s page to `path`.
pub fn write_snapshot(view: &ConsoleView, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, view.page().to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tutor_application::{
        BackendError, ChatBackend, ChatOutcome, ChatReply, ChatRequest, FixedPrompt,
    };
    use tutor_domain::{Message, Session};

    struct StaticBackend;

    #[async_trait]
    impl ChatBackend for StaticBackend {
        async fn list_sessions(&self) -> Result<Vec<Session>, BackendError> {
            Ok(vec![
                Session::new(SessionId::new("alpha").unwrap(), "Alpha"),
                Session::new(SessionId::new("beta").unwrap(), "Beta"),
            ])
        }

        async fn fetch_history(&self, id: &SessionId) -> Result<Vec<Message>, BackendError> {
            Ok(vec![
                Message::user(format!("question in {}", id)),
                Message::assistant("answer"),
            ])
        }

        async fn clear_history(&self) -> Result<(), BackendError> {
            Ok(())
        }

        async fn send_chat(&self, _request: &ChatRequest) -> Result<ChatOutcome, BackendError> {
            Ok(ChatOutcome::Reply(ChatReply {
                response: "ok".to_string(),
                ..Default::default()
            }))
        }
    }

    fn repl() -> ChatRepl {
        colored::control::set_override(false);
        let view = Arc::new(ConsoleView::new("http://localhost:8000"));
        let controller = ChatSessionController::new(
            Arc::new(StaticBackend),
            view.clone(),
            Arc::new(FixedPrompt::accept()),
        );
        ChatRepl::new(controller, view)
    }

    #[tokio::test]
    async fn test_open_by_index_loads_history() {
        let repl = repl();
        repl.controller.load_sessions().await;

        assert!(repl.handle_line("/open 2").await);

        assert_eq!(repl.controller.active(), SessionId::new("beta").ok());
        let elements = repl.view.page().message_elements();
        assert_eq!(elements.len(), 2);
        assert!(elements[0].contains("question in beta"));
    }

    #[tokio::test]
    async fn test_open_unknown_index_keeps_state() {
        let repl = repl();

        assert!(repl.handle_line("/open 7").await);

        assert_eq!(repl.controller.active(), None);
    }

    #[tokio::test]
    async fn test_escaped_slash_line_is_sent() {
        let repl = repl();

        assert!(repl.handle_line("//etc/hosts format?").await);

        let elements = repl.view.page().message_elements();
        assert_eq!(elements.len(), 2);
        assert!(elements[0].contains(">/etc/hosts format?<"));
    }

    #[tokio::test]
    async fn test_quit_stops_loop() {
        let repl = repl();
        assert!(!repl.handle_line("/quit").await);
    }

    #[tokio::test]
    async fn test_export_writes_page() {
        let repl = repl();
        repl.handle_line("Hello").await;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snap").join("chat.html");
        assert!(repl.handle_line(&format!("/export {}", path.display())).await);

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(">Hello<"));
    }
}
