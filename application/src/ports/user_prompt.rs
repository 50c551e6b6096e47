//! Blocking user prompt port.
//!
//! Confirmation and alert dialogs are hard stops: the calling flow does not
//! continue until the user has answered.

/// Port for blocking confirm/alert dialogs.
pub trait UserPrompt: Send + Sync {
    /// Ask a yes/no question. `true` means proceed.
    fn confirm(&self, message: &str) -> bool;

    /// Show a message the user must acknowledge.
    fn alert(&self, message: &str);
}

/// Answers every confirmation with a fixed decision and drops alerts.
///
/// Used for non-interactive runs.
pub struct FixedPrompt {
    answer: bool,
}

impl FixedPrompt {
    pub fn accept() -> Self {
        Self { answer: true }
    }

    pub fn decline() -> Self {
        Self { answer: false }
    }
}

impl UserPrompt for FixedPrompt {
    fn confirm(&self, _message: &str) -> bool {
        self.answer
    }

    fn alert(&self, message: &str) {
        tracing::warn!("Alert (non-interactive): {}", message);
    }
}
