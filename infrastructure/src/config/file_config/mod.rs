//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types at
//! the edge.

mod behavior;
mod logging;
mod model;
mod ollama;
mod repl;
mod self_care;

pub use behavior::FileBehaviorConfig;
pub use logging::FileLoggingConfig;
pub use model::FileModelConfig;
pub use ollama::{DEFAULT_OLLAMA_URL, FileOllamaConfig};
pub use repl::FileReplConfig;
pub use self_care::FileSelfCareConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("model.name cannot be empty")]
    EmptyModelName,

    #[error("ollama.base_url must start with http:// or https:// (got '{0}')")]
    InvalidBaseUrl(String),

    #[error("behavior.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("self_care.{0} cannot be empty")]
    EmptyPrompt(&'static str),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Model selection
    pub model: FileModelConfig,
    /// Ollama server settings
    pub ollama: FileOllamaConfig,
    /// Runtime behavior (timeouts)
    pub behavior: FileBehaviorConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Self-care prompt overrides
    pub self_care: FileSelfCareConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.model.name.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyModelName);
        }

        let url = self.ollama.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            issues.push(ConfigValidationError::InvalidBaseUrl(url.to_string()));
        }

        if self.behavior.timeout_seconds == Some(0) {
            issues.push(ConfigValidationError::InvalidTimeout);
        }

        if let Some(prompt) = &self.self_care.affirmation_prompt
            && prompt.trim().is_empty()
        {
            issues.push(ConfigValidationError::EmptyPrompt("affirmation_prompt"));
        }
        if let Some(prompt) = &self.self_care.meditation_prompt
            && prompt.trim().is_empty()
        {
            issues.push(ConfigValidationError::EmptyPrompt("meditation_prompt"));
        }

        issues
    }
}
