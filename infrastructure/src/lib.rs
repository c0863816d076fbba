//! Infrastructure layer for healthchat
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig, FileReplConfig,
    FileSelfCareConfig,
};
pub use logging::JsonlConversationLogger;
pub use providers::{build_provider, ollama::OllamaProvider};
