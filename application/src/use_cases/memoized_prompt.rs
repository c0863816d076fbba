//! Memoized prompt use case.
//!
//! A [`MemoizedPromptRunner`] wraps one fixed prompt and remembers the first
//! successful response for the rest of the process lifetime. Failures are
//! returned as text but never cached, so the next call retries.
//!
//! The cache holds exactly one entry per runner and is never evicted.

use crate::ports::response_provider::ResponseProvider;
use crate::use_cases::shared::error_reply;
use healthchat_domain::{Message, truncate};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Runs a fixed prompt once and caches the successful result.
///
/// Safe to share behind an `Arc`: the first-call path holds an async lock,
/// so concurrent first callers trigger a single provider call.
pub struct MemoizedPromptRunner {
    prompt: String,
    provider: Arc<dyn ResponseProvider>,
    cached: Mutex<Option<String>>,
}

impl MemoizedPromptRunner {
    pub fn new(prompt: impl Into<String>, provider: Arc<dyn ResponseProvider>) -> Self {
        Self {
            prompt: prompt.into(),
            provider,
            cached: Mutex::new(None),
        }
    }

    /// The fixed prompt this runner sends
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Return the cached response, generating it on first use.
    pub async fn run(&self) -> String {
        let mut cached = self.cached.lock().await;
        if let Some(text) = cached.as_ref() {
            debug!("Cache hit for prompt: {}", truncate(&self.prompt, 60));
            return text.clone();
        }

        info!("Generating response for prompt: {}", truncate(&self.prompt, 60));
        let messages = [Message::user(self.prompt.as_str())];
        match self.provider.complete(&messages).await {
            Ok(text) => {
                *cached = Some(text.clone());
                text
            }
            Err(e) => {
                warn!("Prompt generation failed, will retry on next run: {}", e);
                error_reply(&e)
            }
        }
    }

    /// The cached response, if one has been generated
    pub async fn cached(&self) -> Option<String> {
        self.cached.lock().await.clone()
    }
}
