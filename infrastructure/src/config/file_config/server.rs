//! Server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

/// Default backend address (the development server's bind address).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Raw server configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Base URL of the chat backend; endpoints are resolved against it
    pub base_url: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
