//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of the conversation (disabled if unset)
    pub conversation_log: Option<String>,
    /// Diagnostic log file; logs go to stderr if unset
    pub file: Option<String>,
}
