//! Loading placeholder identifiers.

use std::fmt;

/// Prefix shared by every loading placeholder id.
pub const LOADING_PREFIX: &str = "loading-";

/// Identifier of a transient "Thinking..." placeholder.
///
/// Derived from the current time in milliseconds. Not globally unique, but
/// two placeholders created within one millisecond is not a case the view
/// has to handle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoadingId(String);

impl LoadingId {
    pub fn now() -> Self {
        Self::from_millis(chrono::Utc::now().timestamp_millis())
    }

    pub fn from_millis(millis: i64) -> Self {
        Self(format!("{}{}", LOADING_PREFIX, millis))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether an element id looks like any loading placeholder.
    pub fn matches_prefix(id: &str) -> bool {
        id.starts_with(LOADING_PREFIX)
    }
}

impl fmt::Display for LoadingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
