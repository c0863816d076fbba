//! Model configuration from TOML (`[model]` section)

use healthchat_domain::{DomainError, Model};
use serde::{Deserialize, Serialize};

/// Raw model configuration from TOML
///
/// # Example
///
/// ```toml
/// [model]
/// name = "llama3.2"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelConfig {
    /// Name of the model as known to the local Ollama install
    pub name: String,
}

impl Default for FileModelConfig {
    fn default() -> Self {
        Self {
            name: Model::default().to_string(),
        }
    }
}

impl FileModelConfig {
    /// Parse the model name into a [`Model`]
    pub fn parse(&self) -> Result<Model, DomainError> {
        self.name.parse()
    }
}
