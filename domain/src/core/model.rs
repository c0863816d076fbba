//! Model value object representing a locally hosted LLM

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Locally hosted LLM models (Value Object)
///
/// The well-known variants are lightweight models commonly pulled into a
/// local Ollama install. Anything else is carried as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    TinyLlama,
    Llama32,
    Llama31,
    Mistral,
    Phi3,
    Gemma2,
    Qwen25,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::TinyLlama => "tinyllama",
            Model::Llama32 => "llama3.2",
            Model::Llama31 => "llama3.1",
            Model::Mistral => "mistral",
            Model::Phi3 => "phi3",
            Model::Gemma2 => "gemma2",
            Model::Qwen25 => "qwen2.5",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (tinyllama)
    fn default() -> Self {
        Model::TinyLlama
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s {
            "" => return Err(DomainError::InvalidModel(s.to_string())),
            "tinyllama" | "tinyllama:latest" => Model::TinyLlama,
            "llama3.2" | "llama3.2:latest" => Model::Llama32,
            "llama3.1" | "llama3.1:latest" => Model::Llama31,
            "mistral" | "mistral:latest" => Model::Mistral,
            "phi3" | "phi3:latest" => Model::Phi3,
            "gemma2" | "gemma2:latest" => Model::Gemma2,
            "qwen2.5" | "qwen2.5:latest" => Model::Qwen25,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
