//! Ollama response provider
//!
//! Implements [`ResponseProvider`] against a local Ollama server using the
//! non-streaming `/api/chat` endpoint.

use super::types::{ChatRequest, ChatResponse};
use async_trait::async_trait;
use healthchat_application::{ProviderError, ResponseProvider};
use healthchat_domain::{Message, Model};
use tracing::debug;

pub struct OllamaProvider {
    http: reqwest::Client,
    base_url: String,
    model: Model,
}

impl OllamaProvider {
    pub fn new(base_url: impl Into<String>, model: Model) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            model,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }

    /// Extract the reply from a raw response body
    pub(crate) fn parse_body(body: &str) -> Result<String, ProviderError> {
        let response: ChatResponse = serde_json::from_str(body)
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        if let Some(error) = response.error.clone() {
            return Err(ProviderError::RequestFailed(error));
        }

        response.assistant_content().ok_or_else(|| {
            ProviderError::MalformedResponse("response has no assistant message".to_string())
        })
    }

    /// Error for a non-2xx reply, preferring Ollama's own `error` message
    /// over the raw body
    pub(crate) fn http_error(status: reqwest::StatusCode, body: &str) -> ProviderError {
        let detail = serde_json::from_str::<ChatResponse>(body)
            .ok()
            .and_then(|response| response.error)
            .unwrap_or_else(|| body.trim().to_string());
        ProviderError::RequestFailed(format!("HTTP {status}: {detail}"))
    }
}

#[async_trait]
impl ResponseProvider for OllamaProvider {
    async fn complete(&self, messages: &[Message]) -> Result<String, ProviderError> {
        let body = ChatRequest::new(self.model.as_str(), messages);
        let url = self.chat_url();

        debug!(model = %self.model, messages = messages.len(), "Ollama chat request");

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ProviderError::Unreachable(format!("{} ({})", self.base_url, e))
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::MalformedResponse(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::http_error(status, &text));
        }

        Self::parse_body(&text)
    }

    fn model(&self) -> Option<&Model> {
        Some(&self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let provider = OllamaProvider::new("http://localhost:11434/", Model::TinyLlama);
        assert_eq!(provider.base_url(), "http://localhost:11434");
        assert_eq!(provider.chat_url(), "http://localhost:11434/api/chat");
        assert_eq!(provider.model(), Some(&Model::TinyLlama));
    }

    #[test]
    fn test_parse_success_body() {
        let body = r#"{"message": {"role": "assistant", "content": "Hello back"}, "done": true}"#;
        assert_eq!(OllamaProvider::parse_body(body), Ok("Hello back".to_string()));
    }

    #[test]
    fn test_parse_error_body() {
        let body = r#"{"error": "model \"tinyllama\" not found, try pulling it first"}"#;
        assert!(matches!(
            OllamaProvider::parse_body(body),
            Err(ProviderError::RequestFailed(msg)) if msg.contains("try pulling it first")
        ));
    }

    #[test]
    fn test_http_error_uses_ollama_message() {
        let err = OllamaProvider::http_error(
            reqwest::StatusCode::NOT_FOUND,
            r#"{"error": "model \"phi3\" not found, try pulling it first"}"#,
        );
        assert_eq!(
            err,
            ProviderError::RequestFailed(
                "HTTP 404 Not Found: model \"phi3\" not found, try pulling it first".to_string()
            )
        );
    }

    #[test]
    fn test_http_error_falls_back_to_body() {
        let err = OllamaProvider::http_error(
            reqwest::StatusCode::BAD_GATEWAY,
            "<html>bad gateway</html>\n",
        );
        assert_eq!(
            err,
            ProviderError::RequestFailed("HTTP 502 Bad Gateway: <html>bad gateway</html>".to_string())
        );
    }

    #[test]
    fn test_parse_malformed_body() {
        assert!(matches!(
            OllamaProvider::parse_body("<html>bad gateway</html>"),
            Err(ProviderError::MalformedResponse(_))
        ));
        assert!(matches!(
            OllamaProvider::parse_body(r#"{"done": true}"#),
            Err(ProviderError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        // Port 9 (discard) is closed on any normal host
        let provider = OllamaProvider::new("http://127.0.0.1:9", Model::TinyLlama);
        let result = provider.complete(&[Message::user("Hi")]).await;
        assert!(matches!(result, Err(ProviderError::Unreachable(_))));
    }
}
