//! Configuration file loading for tutor-chat
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `TUTOR_CHAT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./tutor-chat.toml` or `./.tutor-chat.toml`
//! 4. Global: `<config_dir>/tutor-chat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigError, DEFAULT_BASE_URL, FileConfig, FileServerConfig, FileTranscriptConfig,
    FileUiConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
