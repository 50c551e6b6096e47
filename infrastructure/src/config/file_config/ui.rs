//! UI configuration from TOML (`[ui]` section)

use serde::{Deserialize, Serialize};

/// Raw UI configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUiConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Print source citations under assistant replies
    pub show_sources: bool,
}

impl Default for FileUiConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_sources: true,
        }
    }
}
