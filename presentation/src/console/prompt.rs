//! Blocking terminal prompts.

use super::view::ConsoleView;
use colored::Colorize;
use indicatif::MultiProgress;
use std::io::{self, BufRead, Write};
use tutor_application::UserPrompt;

/// [`UserPrompt`] reading answers from stdin.
///
/// Both methods block until the user presses Enter. A read error counts as
/// "no" for confirmations. Spinners in `progress` are hidden while waiting.
pub struct ConsolePrompt {
    progress: MultiProgress,
}

impl ConsolePrompt {
    pub fn new(progress: MultiProgress) -> Self {
        Self { progress }
    }

    /// Prompt sharing the spinner group of `view`.
    pub fn for_view(view: &ConsoleView) -> Self {
        Self::new(view.progress().clone())
    }

    /// Run `f` with every spinner cleared and stopped from redrawing.
    fn blocking<T>(&self, f: impl FnOnce() -> T) -> T {
        self.progress.suspend(f)
    }

    fn read_line() -> io::Result<String> {
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }

    /// Interpret a confirmation answer. Only an explicit yes proceeds.
    pub fn is_yes(answer: &str) -> bool {
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new(MultiProgress::new())
    }
}

impl UserPrompt for ConsolePrompt {
    fn confirm(&self, message: &str) -> bool {
        self.blocking(|| {
            print!("{} {} ", message.yellow().bold(), "[y/N]".dimmed());
            let _ = io::stdout().flush();
            Self::read_line().map(|a| Self::is_yes(&a)).unwrap_or(false)
        })
    }

    fn alert(&self, message: &str) {
        self.blocking(|| {
            println!("{} {}", "!".red().bold(), message.red());
            print!("{}", "Press Enter to continue...".dimmed());
            let _ = io::stdout().flush();
            let _ = Self::read_line();
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indicatif::{ProgressBar, ProgressDrawTarget};
    use tutor_application::ViewRenderer;
    use tutor_domain::LoadingId;

    #[test]
    fn test_is_yes() {
        for answer in ["y", "Y", "yes", " YES\n"] {
            assert!(ConsolePrompt::is_yes(answer), "{answer:?}");
        }
        for answer in ["", "n", "no", "yep", "\n"] {
            assert!(!ConsolePrompt::is_yes(answer), "{answer:?}");
        }
    }

    #[test]
    fn test_blocking_holds_running_spinner() {
        let progress = MultiProgress::with_draw_target(ProgressDrawTarget::hidden());
        let bar = progress.add(ProgressBar::new_spinner());
        bar.enable_steady_tick(std::time::Duration::from_millis(10));
        let prompt = ConsolePrompt::new(progress);

        let answer = prompt.blocking(|| {
            std::thread::sleep(std::time::Duration::from_millis(30));
            "n"
        });

        assert_eq!(answer, "n");
        assert!(!bar.is_finished());
        bar.finish_and_clear();
    }

    #[test]
    fn test_prompt_shares_view_spinners() {
        let view = ConsoleView::new("http://localhost:8000");
        view.show_loading(&LoadingId::from_millis(1));
        let prompt = ConsolePrompt::for_view(&view);

        // The view's spinner keeps running across the suspended section and
        // is removed as usual afterwards.
        prompt.blocking(|| ());
        assert_eq!(view.page().loading_ids(), vec!["loading-1".to_string()]);
        view.remove_loading_with_prefix("loading-");
        assert!(view.page().loading_ids().is_empty());
    }
}
