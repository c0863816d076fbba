//! Configuration file loading for healthchat
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `HEALTHCHAT_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./healthchat.toml` or `./.healthchat.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/healthchat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_OLLAMA_URL, FileBehaviorConfig, FileConfig, FileLoggingConfig,
    FileModelConfig, FileOllamaConfig, FileReplConfig, FileSelfCareConfig,
};
pub use loader::ConfigLoader;
