//! Ollama `/api/chat` wire types.

use healthchat_domain::{Message, Role};
use serde::{Deserialize, Serialize};

/// A message as sent to and received from Ollama
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaMessage {
    pub role: String,
    pub content: String,
}

impl From<&Message> for OllamaMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role.as_str().to_string(),
            content: message.content.clone(),
        }
    }
}

/// Non-streaming chat request body
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<OllamaMessage>,
    pub stream: bool,
}

impl<'a> ChatRequest<'a> {
    pub fn new(model: &'a str, messages: &[Message]) -> Self {
        Self {
            model,
            messages: messages.iter().map(OllamaMessage::from).collect(),
            stream: false,
        }
    }
}

/// Non-streaming chat response body (only the fields we read)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub message: Option<OllamaMessage>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ChatResponse {
    /// The assistant's reply, if the response carries one
    pub fn assistant_content(self) -> Option<String> {
        self.message
            .filter(|m| m.role == Role::Assistant.as_str())
            .map(|m| m.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let messages = [Message::user("Hi"), Message::assistant("Hello back")];
        let request = ChatRequest::new("tinyllama", &messages);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "tinyllama",
                "messages": [
                    {"role": "user", "content": "Hi"},
                    {"role": "assistant", "content": "Hello back"}
                ],
                "stream": false
            })
        );
    }

    #[test]
    fn test_response_content() {
        let body = r#"{
            "model": "tinyllama",
            "created_at": "2024-01-01T00:00:00Z",
            "message": {"role": "assistant", "content": "You matter."},
            "done": true
        }"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.assistant_content(), Some("You matter.".to_string()));
    }

    #[test]
    fn test_response_without_message() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"error": "model 'foo' not found"}"#).unwrap();
        assert_eq!(response.error.as_deref(), Some("model 'foo' not found"));
        assert_eq!(response.assistant_content(), None);
    }
}
