//! Ollama provider: chat completions from a locally hosted model.

mod provider;
mod types;

pub use provider::OllamaProvider;
