//! Session Directory: listing sessions and clearing history.

use super::ChatSessionController;
use crate::ports::transcript_logger::TranscriptEvent;
use serde_json::json;
use tracing::{debug, error, info};
use tutor_domain::SessionEntry;

/// Confirmation shown before deleting all history.
pub const CLEAR_CONFIRMATION: &str =
    "Are you sure you want to delete all chat history? This cannot be undone.";

/// Alert shown when the deletion request fails.
pub const CLEAR_FAILED_ALERT: &str = "Failed to clear history.";

/// What `clear_history` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    /// The user declined the confirmation; nothing was sent.
    Declined,
    /// History deleted and the directory refreshed.
    Cleared,
    /// History deleted while a session was open; the view was reloaded.
    ClearedAndReloaded,
    /// The deletion request failed; the directory is unchanged.
    Failed,
}

impl ChatSessionController {
    /// Fetch the session list and replace the rendered directory.
    ///
    /// Failures are only logged. The directory keeps whatever it showed
    /// before, which may be stale or empty.
    pub async fn load_sessions(&self) {
        match self.backend.list_sessions().await {
            Ok(sessions) => {
                let active = self.active();
                let entries = SessionEntry::from_sessions(sessions, active.as_ref());
                debug!("Rendering {} sessions", entries.len());
                self.view.render_session_list(&entries);
            }
            Err(e) => {
                error!("Error loading sessions: {}", e);
            }
        }
    }

    /// Delete all history after the user confirms.
    ///
    /// If a session was open, the view is reloaded so a deleted
    /// conversation is never left on screen.
    pub async fn clear_history(&self) -> ClearOutcome {
        if !self.prompt.confirm(CLEAR_CONFIRMATION) {
            debug!("Clear history declined");
            return ClearOutcome::Declined;
        }

        match self.backend.clear_history().await {
            Ok(()) => {
                info!("Chat history cleared");
                self.transcript
                    .log(TranscriptEvent::new("history_cleared", json!({})));

                self.load_sessions().await;

                if self.active().is_some() {
                    self.set_active(None);
                    self.view.reload();
                    ClearOutcome::ClearedAndReloaded
                } else {
                    ClearOutcome::Cleared
                }
            }
            Err(e) => {
                error!("Error clearing history: {}", e);
                self.prompt.alert(CLEAR_FAILED_ALERT);
                ClearOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::*;
    use super::*;
    use crate::ports::chat_backend::BackendError;

    #[tokio::test]
    async fn test_load_sessions_marks_active_entry() {
        let backend = MockBackend::new().with_sessions(vec![session("a", "A"), session("b", "B")]);
        let h = Harness::new(backend);
        h.controller.set_active(Some(sid("b")));

        h.controller.load_sessions().await;

        let rows = h.view.directory();
        assert_eq!(rows.len(), 2);
        assert_eq!(h.view.active_rows(), vec!["b".to_string()]);
    }

    #[tokio::test]
    async fn test_load_sessions_replaces_previous_rows() {
        let backend = MockBackend::new().with_sessions(vec![session("a", "A")]);
        let h = Harness::new(backend);
        h.view
            .render_session_list(&SessionEntry::from_sessions(vec![session("old", "Old")], None));

        h.controller.load_sessions().await;

        let ids: Vec<_> = h.view.directory().into_iter().map(|e| e.session.id).collect();
        assert_eq!(ids, vec![sid("a")]);
    }

    #[tokio::test]
    async fn test_load_sessions_failure_keeps_stale_directory() {
        let backend = MockBackend::new()
            .with_sessions_error(BackendError::Connection("refused".to_string()));
        let h = Harness::new(backend);
        h.view
            .render_session_list(&SessionEntry::from_sessions(vec![session("old", "Old")], None));

        h.controller.load_sessions().await;

        assert_eq!(h.view.directory().len(), 1);
        assert!(h.prompt.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_clear_history_declined_sends_nothing() {
        let h = Harness::with_prompt(MockBackend::new(), MockPrompt::declining());

        let outcome = h.controller.clear_history().await;

        assert_eq!(outcome, ClearOutcome::Declined);
        assert_eq!(h.backend.clear_calls(), 0);
        assert_eq!(h.prompt.confirmations(), vec![CLEAR_CONFIRMATION.to_string()]);
    }

    #[tokio::test]
    async fn test_clear_history_without_active_session_refreshes() {
        let h = Harness::new(MockBackend::new().with_sessions(vec![]));

        let outcome = h.controller.clear_history().await;

        assert_eq!(outcome, ClearOutcome::Cleared);
        assert_eq!(h.backend.clear_calls(), 1);
        assert_eq!(h.backend.list_calls(), 1);
        assert_eq!(h.view.reloads(), 0);
    }

    #[tokio::test]
    async fn test_clear_history_with_active_session_reloads() {
        let h = Harness::new(MockBackend::new().with_sessions(vec![]));
        h.controller.set_active(Some(sid("s1")));

        let outcome = h.controller.clear_history().await;

        assert_eq!(outcome, ClearOutcome::ClearedAndReloaded);
        assert_eq!(h.view.reloads(), 1);
        assert_eq!(h.controller.active(), None);
    }

    #[tokio::test]
    async fn test_clear_history_failure_alerts_and_keeps_directory() {
        let backend = MockBackend::new().with_clear_error(BackendError::Status { status: 500 });
        let h = Harness::new(backend);
        h.controller.set_active(Some(sid("s1")));
        h.view
            .render_session_list(&SessionEntry::from_sessions(vec![session("s1", "One")], None));

        let outcome = h.controller.clear_history().await;

        assert_eq!(outcome, ClearOutcome::Failed);
        assert_eq!(h.prompt.alerts(), vec![CLEAR_FAILED_ALERT.to_string()]);
        assert_eq!(h.view.directory().len(), 1);
        assert_eq!(h.backend.list_calls(), 0);
        assert_eq!(h.controller.active(), Some(sid("s1")));
    }
}
