//! Response provider port
//!
//! Defines the interface for generating text from a conversation. This is
//! the boundary to the language model: the application layer never assumes
//! a particular model, endpoint or transport.

use async_trait::async_trait;
use healthchat_domain::{Message, Model};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while generating a response
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Connection error: {0}")]
    Unreachable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),
}

/// Capability that turns an ordered message list into generated text.
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ResponseProvider: Send + Sync {
    /// Generate the next assistant message for `messages`
    async fn complete(&self, messages: &[Message]) -> Result<String, ProviderError>;

    /// Model backing this provider, if known
    fn model(&self) -> Option<&Model> {
        None
    }
}

#[async_trait]
impl<P: ResponseProvider + ?Sized> ResponseProvider for Arc<P> {
    async fn complete(&self, messages: &[Message]) -> Result<String, ProviderError> {
        (**self).complete(messages).await
    }

    fn model(&self) -> Option<&Model> {
        (**self).model()
    }
}

/// Wraps a provider so each call fails with [`ProviderError::Timeout`]
/// once `timeout` has elapsed.
pub struct TimeoutProvider<P> {
    inner: P,
    timeout: Duration,
}

impl<P: ResponseProvider> TimeoutProvider<P> {
    pub fn new(inner: P, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl<P: ResponseProvider> ResponseProvider for TimeoutProvider<P> {
    async fn complete(&self, messages: &[Message]) -> Result<String, ProviderError> {
        tokio::time::timeout(self.timeout, self.inner.complete(messages))
            .await
            .map_err(|_| ProviderError::Timeout(self.timeout))?
    }

    fn model(&self) -> Option<&Model> {
        self.inner.model()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SlowProvider;

    #[async_trait]
    impl ResponseProvider for SlowProvider {
        async fn complete(&self, _messages: &[Message]) -> Result<String, ProviderError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok("too late".to_string())
        }
    }

    struct EchoProvider(Model);

    #[async_trait]
    impl ResponseProvider for EchoProvider {
        async fn complete(&self, messages: &[Message]) -> Result<String, ProviderError> {
            Ok(messages
                .last()
                .map(|m| m.content.clone())
                .unwrap_or_default())
        }

        fn model(&self) -> Option<&Model> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_error_display_embeds_detail() {
        let err = ProviderError::Unreachable("connection refused".to_string());
        assert_eq!(err.to_string(), "Connection error: connection refused");
        let err = ProviderError::MalformedResponse("missing message.content".to_string());
        assert!(err.to_string().contains("missing message.content"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_provider_times_out() {
        let provider = TimeoutProvider::new(SlowProvider, Duration::from_secs(5));
        let result = provider.complete(&[Message::user("Hi")]).await;
        assert_eq!(result, Err(ProviderError::Timeout(Duration::from_secs(5))));
    }

    #[tokio::test]
    async fn test_timeout_provider_passes_through() {
        let provider = TimeoutProvider::new(EchoProvider(Model::Phi3), Duration::from_secs(5));
        let result = provider.complete(&[Message::user("Hi")]).await;
        assert_eq!(result, Ok("Hi".to_string()));
        assert_eq!(provider.model(), Some(&Model::Phi3));
    }

    #[tokio::test]
    async fn test_arc_provider_delegates() {
        let provider: Arc<dyn ResponseProvider> = Arc::new(EchoProvider(Model::Gemma2));
        let result = provider.complete(&[Message::user("ping")]).await;
        assert_eq!(result.unwrap(), "ping");
        assert_eq!(provider.model(), Some(&Model::Gemma2));
    }
}
