//! Ollama configuration from TOML (`[ollama]` section)

use serde::{Deserialize, Serialize};

/// Default address of a local Ollama server
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Raw Ollama server configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    /// Base URL of the Ollama HTTP API
    pub base_url: String,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_OLLAMA_URL.to_string(),
        }
    }
}
