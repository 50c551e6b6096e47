//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod server;
mod transcript;
mod ui;

pub use server::{DEFAULT_BASE_URL, FileServerConfig};
pub use transcript::FileTranscriptConfig;
pub use ui::FileUiConfig;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid server.base_url '{value}': {reason}")]
    InvalidBaseUrl { value: String, reason: String },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend connection
    pub server: FileServerConfig,
    /// Terminal rendering
    pub ui: FileUiConfig,
    /// JSONL transcript recording
    pub transcript: FileTranscriptConfig,
}

impl FileConfig {
    /// Validate the configuration.
    ///
    /// The base URL must parse and use `http` or `https`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let value = &self.server.base_url;
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            value: value.clone(),
            reason,
        };

        let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            other => Err(invalid(format!("unsupported scheme '{}'", other))),
        }
    }
}
