//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Session id must not be empty")]
    EmptySessionId,

    #[error("Unknown message role: {0}")]
    UnknownRole(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            DomainError::EmptySessionId.to_string(),
            "Session id must not be empty"
        );
        assert_eq!(
            DomainError::UnknownRole("system".to_string()).to_string(),
            "Unknown message role: system"
        );
    }
}
