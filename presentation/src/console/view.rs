//! Terminal renderer for the chat.
//!
//! Prints messages and the session directory as they arrive and shows a
//! spinner for each loading placeholder. An [`HtmlView`] is kept in step
//! with everything printed so the page can be exported at any time.
//!
//! Spinners live in one [`MultiProgress`]. Anything else written to the
//! terminal while they run goes through [`MultiProgress::suspend`] so a
//! redraw never lands on top of it.

use crate::html::HtmlView;
use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use regex::Regex;
use std::sync::{LazyLock, Mutex, PoisonError};
use std::time::Duration;
use tutor_application::ViewRenderer;
use tutor_domain::{Citation, LoadingId, Message, Role, SessionEntry, SessionId};

static BOLD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"));

/// Console [`ViewRenderer`].
pub struct ConsoleView {
    base_url: String,
    show_sources: bool,
    page: HtmlView,
    progress: MultiProgress,
    spinners: Mutex<Vec<(LoadingId, ProgressBar)>>,
    directory: Mutex<Vec<SessionEntry>>,
    welcome_shown: Mutex<bool>,
}

impl ConsoleView {
    /// `base_url` is used to print absolute document links.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            show_sources: true,
            page: HtmlView::new(),
            progress: MultiProgress::new(),
            spinners: Mutex::new(Vec::new()),
            directory: Mutex::new(Vec::new()),
            welcome_shown: Mutex::new(false),
        }
    }

    /// Set whether citations are printed under replies
    pub fn with_sources(mut self, show: bool) -> Self {
        self.show_sources = show;
        self
    }

    /// The HTML page kept in step with the console.
    pub fn page(&self) -> &HtmlView {
        &self.page
    }

    /// Spinner group; prompts suspend it while they wait for input.
    pub fn progress(&self) -> &MultiProgress {
        &self.progress
    }

    /// Resolve a directory row (1-based, as printed) to its session.
    pub fn session_at(&self, index: usize) -> Option<SessionId> {
        let directory = self.directory.lock().unwrap_or_else(PoisonError::into_inner);
        index
            .checked_sub(1)
            .and_then(|i| directory.get(i))
            .map(|entry| entry.session.id.clone())
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("spinner template is valid")
    }

    /// Drop control characters (escape sequences included) from server
    /// text. Newlines and tabs are kept.
    pub fn printable(text: &str) -> String {
        text.chars()
            .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
            .collect()
    }

    /// Apply the `**bold**` transform for the terminal.
    pub fn styled_text(text: &str) -> String {
        BOLD_PATTERN
            .replace_all(text, |caps: &regex::Captures| caps[1].bold().to_string())
            .into_owned()
    }

    /// One printed line per citation.
    pub fn citation_line(&self, raw: &str) -> String {
        let citation = Citation::parse(raw);
        let label = Self::printable(citation.label());
        match citation.href() {
            Some(href) => format!(
                "  - {} {}",
                label,
                Self::printable(&format!("{}{}", self.base_url, href))
                    .underline()
                    .blue()
            ),
            None => format!("  - {}", label),
        }
    }

    fn print_welcome(&self) {
        let mut shown = self.welcome_shown.lock().unwrap_or_else(PoisonError::into_inner);
        if *shown {
            return;
        }
        *shown = true;
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│     How can I help you study today?         │");
        println!("╰─────────────────────────────────────────────╯");
        println!("Type a question, or /help for commands.");
        println!();
    }

    fn stop_spinners(&self) {
        let mut spinners = self.spinners.lock().unwrap_or_else(PoisonError::into_inner);
        for (_, bar) in spinners.drain(..) {
            bar.finish_and_clear();
            self.progress.remove(&bar);
        }
    }
}

impl ViewRenderer for ConsoleView {
    fn render_message(&self, message: &Message) {
        self.page.render_message(message);

        let label = match message.role {
            Role::User => "You".green().bold(),
            Role::Assistant => "Tutor".cyan().bold(),
        };
        let text = Self::styled_text(&Self::printable(&message.content));

        self.progress.suspend(|| {
            println!("{} {}", label, text);
            if self.show_sources && message.has_sources() {
                println!("{}", "Sources:".dimmed());
                for source in &message.sources {
                    println!("{}", self.citation_line(source));
                }
            }
            println!();
        });
    }

    fn render_session_list(&self, entries: &[SessionEntry]) {
        self.page.render_session_list(entries);
        *self.directory.lock().unwrap_or_else(PoisonError::into_inner) = entries.to_vec();

        self.progress.suspend(|| {
            println!("{}", "Sessions:".cyan().bold());
            if entries.is_empty() {
                println!("  {}", "(no conversations yet)".dimmed());
            }
            for (i, entry) in entries.iter().enumerate() {
                let title = Self::printable(&entry.session.title).replace(['\n', '\t'], " ");
                let line = format!("{:>3}. {}", i + 1, title);
                if entry.active {
                    println!("{} {}", "*".green(), line.bold());
                } else {
                    println!("  {}", line);
                }
            }
            println!();
        });
    }

    fn show_loading(&self, id: &LoadingId) {
        self.page.show_loading(id);

        let bar = self.progress.add(ProgressBar::new_spinner());
        bar.set_style(Self::spinner_style());
        bar.set_message("Thinking...");
        bar.enable_steady_tick(Duration::from_millis(100));
        self.spinners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id.clone(), bar));
    }

    fn hide_loading(&self, id: &LoadingId) {
        self.page.hide_loading(id);

        let mut spinners = self.spinners.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(pos) = spinners.iter().position(|(existing, _)| existing == id) {
            let (_, bar) = spinners.remove(pos);
            bar.finish_and_clear();
            self.progress.remove(&bar);
        }
    }

    fn remove_loading_with_prefix(&self, prefix: &str) {
        self.page.remove_loading_with_prefix(prefix);

        let mut spinners = self.spinners.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(pos) = spinners
            .iter()
            .position(|(id, _)| id.as_str().starts_with(prefix))
        {
            let (_, bar) = spinners.remove(pos);
            bar.finish_and_clear();
            self.progress.remove(&bar);
        }
    }

    fn set_welcome_visible(&self, visible: bool) {
        self.page.set_welcome_visible(visible);
        if visible {
            self.print_welcome();
        } else {
            *self.welcome_shown.lock().unwrap_or_else(PoisonError::into_inner) = false;
        }
    }

    fn clear_messages(&self) {
        self.page.clear_messages();
        self.stop_spinners();
        println!("{}", "─".repeat(48).dimmed());
    }

    fn clear_active_marks(&self) {
        self.page.clear_active_marks();
        for entry in self
            .directory
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter_mut()
        {
            entry.active = false;
        }
    }

    fn clear_input(&self) {
        self.page.clear_input();
    }

    fn reload(&self) {
        self.page.reload();
        self.stop_spinners();
        self.clear_active_marks();
        *self.welcome_shown.lock().unwrap_or_else(PoisonError::into_inner) = false;
        self.print_welcome();
    }
}
