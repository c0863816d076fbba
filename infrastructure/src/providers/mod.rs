//! Response provider adapters.

pub mod ollama;

use crate::config::FileConfig;
use healthchat_application::{ResponseProvider, TimeoutProvider};
use healthchat_domain::DomainError;
use ollama::OllamaProvider;
use std::sync::Arc;
use tracing::info;

/// Build the provider described by `config`, wrapped in a timeout when one
/// is configured.
pub fn build_provider(config: &FileConfig) -> Result<Arc<dyn ResponseProvider>, DomainError> {
    let model = config.model.parse()?;
    let provider = OllamaProvider::new(config.ollama.base_url.clone(), model);
    info!(
        model = %config.model.name,
        url = %provider.base_url(),
        "Ollama provider initialized"
    );

    Ok(match config.behavior.to_behavior_config().timeout {
        Some(timeout) => Arc::new(TimeoutProvider::new(provider, timeout)),
        None => Arc::new(provider),
    })
}
