//! Transcript configuration from TOML (`[transcript]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw transcript configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTranscriptConfig {
    /// Record a JSONL transcript of every exchange
    pub enabled: bool,
    /// Transcript file; defaults to `<data_dir>/tutor-chat/transcript.jsonl`
    pub path: Option<PathBuf>,
}

impl FileTranscriptConfig {
    /// Resolve the transcript path, if transcripts are enabled.
    pub fn resolved_path(&self) -> Option<PathBuf> {
        if !self.enabled {
            return None;
        }
        self.path.clone().or_else(|| {
            dirs::data_dir().map(|d| d.join("tutor-chat").join("transcript.jsonl"))
        })
    }
}
