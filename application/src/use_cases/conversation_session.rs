//! Conversation session use case.
//!
//! A [`ConversationSession`] owns one linear chat and mediates every call to
//! the [`ResponseProvider`]. Each [`send`](ConversationSession::send) appends
//! exactly two turns: the user's message and then the assistant's reply. When
//! the provider fails, the failure itself becomes the assistant turn, so the
//! conversation always stays renderable and the user sees the error inline.
//!
//! The whole history is sent as context on every call. Nothing is truncated
//! or summarized.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::response_provider::ResponseProvider;
use crate::use_cases::shared::error_reply;
use healthchat_domain::{ConversationHistory, Message, Model, truncate};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// One user's chat with the model.
///
/// `send` takes `&mut self`, so two sends can never overlap on the same
/// session. Sessions are independent; each owns its own history.
pub struct ConversationSession {
    provider: Arc<dyn ResponseProvider>,
    history: ConversationHistory,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ConversationSession {
    pub fn new(provider: Arc<dyn ResponseProvider>) -> Self {
        Self {
            provider,
            history: ConversationHistory::new(),
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Send a user message and return the assistant's reply.
    ///
    /// `user_text` is expected to be non-empty; callers filter blank input.
    /// Never fails: a provider error is returned (and recorded) as the reply.
    pub async fn send(&mut self, user_text: &str) -> String {
        info!("User turn: {}", truncate(user_text, 100));

        self.history.push(Message::user(user_text));
        self.conversation_logger.log(ConversationEvent::new(
            "user_message",
            serde_json::json!({ "content": user_text }),
        ));

        debug!(
            "Sending {} messages to {}",
            self.history.len(),
            self.model_name()
        );

        let reply = match self.provider.complete(self.history.messages()).await {
            Ok(text) => {
                debug!("Received {} bytes from model", text.len());
                self.conversation_logger.log(ConversationEvent::new(
                    "assistant_reply",
                    serde_json::json!({
                        "model": self.model_name(),
                        "bytes": text.len(),
                        "content": text,
                    }),
                ));
                text
            }
            Err(e) => {
                warn!("Response provider failed: {}", e);
                self.conversation_logger.log(ConversationEvent::new(
                    "provider_error",
                    serde_json::json!({
                        "model": self.model_name(),
                        "error": e.to_string(),
                    }),
                ));
                error_reply(&e)
            }
        };

        self.history.push(Message::assistant(reply.clone()));
        reply
    }

    /// Read-only view of the conversation so far, in insertion order.
    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Model backing this session, if the provider reports one.
    pub fn model(&self) -> Option<&Model> {
        self.provider.model()
    }

    /// Start over with an empty history.
    pub fn clear(&mut self) {
        info!("Clearing conversation ({} messages)", self.history.len());
        self.history.clear();
    }

    fn model_name(&self) -> String {
        self.model()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::conversation_logger::ConversationEvent;
    use crate::ports::response_provider::ProviderError;
    use async_trait::async_trait;
    use healthchat_domain::Role;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    /// Replays scripted results and records every message list it was given.
    struct ScriptedProvider {
        responses: Mutex<VecDeque<Result<String, ProviderError>>>,
        calls: Mutex<Vec<Vec<Message>>>,
    }

    impl ScriptedProvider {
        fn new(responses: Vec<Result<String, ProviderError>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(VecDeque::from(responses)),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<Vec<Message>> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ResponseProvider for ScriptedProvider {
        async fn complete(&self, messages: &[Message]) -> Result<String, ProviderError> {
            self.calls.lock().unwrap().push(messages.to_vec());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ProviderError::RequestFailed("No more responses".into())))
        }
    }

    struct ConstantProvider(&'static str);

    #[async_trait]
    impl ResponseProvider for ConstantProvider {
        async fn complete(&self, _messages: &[Message]) -> Result<String, ProviderError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl ResponseProvider for FailingProvider {
        async fn complete(&self, _messages: &[Message]) -> Result<String, ProviderError> {
            Err(ProviderError::Unreachable("connection refused".into()))
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(&'static str, serde_json::Value)>>,
    }

    impl ConversationLogger for RecordingLogger {
        fn log(&self, event: ConversationEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_send_returns_reply_and_records_both_turns() {
        let mut session = ConversationSession::new(Arc::new(ConstantProvider("Hello back")));

        let reply = session.send("Hi").await;

        assert_eq!(reply, "Hello back");
        assert_eq!(
            session.history().messages(),
            &[Message::user("Hi"), Message::assistant("Hello back")]
        );
    }

    #[tokio::test]
    async fn test_history_alternates_user_then_assistant() {
        let mut session = ConversationSession::new(Arc::new(ConstantProvider("ok")));

        for text in ["one", "two", "three", "four"] {
            session.send(text).await;
        }

        let history = session.history();
        assert_eq!(history.len(), 8);
        for (i, message) in history.iter().enumerate() {
            let expected = if i % 2 == 0 { Role::User } else { Role::Assistant };
            assert_eq!(message.role, expected);
        }
        assert_eq!(history.iter().filter(|m| m.is_user()).count(), 4);
    }

    #[tokio::test]
    async fn test_provider_sees_full_history_each_call() {
        let provider = ScriptedProvider::new(vec![Ok("first".into()), Ok("second".into())]);
        let mut session = ConversationSession::new(provider.clone());

        session.send("a").await;
        session.send("b").await;

        let calls = provider.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], vec![Message::user("a")]);
        assert_eq!(
            calls[1],
            vec![
                Message::user("a"),
                Message::assistant("first"),
                Message::user("b"),
            ]
        );
    }

    #[tokio::test]
    async fn test_provider_failure_becomes_assistant_turn() {
        let mut session = ConversationSession::new(Arc::new(FailingProvider));

        let reply = session.send("Hi").await;

        assert!(reply.contains("Error"));
        assert!(reply.contains("connection refused"));
        assert_eq!(session.history().len(), 2);
        let last = session.history().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, reply);
    }

    #[tokio::test]
    async fn test_failure_mid_conversation_still_appends_two_turns() {
        let provider = ScriptedProvider::new(vec![
            Ok("fine".into()),
            Err(ProviderError::MalformedResponse("no content".into())),
            Ok("recovered".into()),
        ]);
        let mut session = ConversationSession::new(provider.clone());

        assert_eq!(session.send("1").await, "fine");
        let failed = session.send("2").await;
        assert!(!failed.is_empty());
        assert!(failed.contains("no content"));
        assert_eq!(session.history().len(), 4);

        // The error turn is part of the context for the next call
        assert_eq!(session.send("3").await, "recovered");
        assert_eq!(session.history().len(), 6);
        assert_eq!(provider.calls()[2][3], Message::assistant(failed));
    }

    #[tokio::test]
    async fn test_logger_records_replies_and_failures() {
        let logger = Arc::new(RecordingLogger::default());
        let provider = ScriptedProvider::new(vec![
            Ok("hello".into()),
            Err(ProviderError::RequestFailed("HTTP 500".into())),
        ]);
        let mut session = ConversationSession::new(provider).with_conversation_logger(logger.clone());

        session.send("hi").await;
        session.send("again").await;

        let events = logger.events.lock().unwrap();
        let types: Vec<&str> = events.iter().map(|(t, _)| *t).collect();
        assert_eq!(
            types,
            vec!["user_message", "assistant_reply", "user_message", "provider_error"]
        );
        assert_eq!(events[1].1["content"], "hello");
        assert_eq!(events[3].1["error"], "Request failed: HTTP 500");
    }

    #[tokio::test]
    async fn test_clear_resets_history() {
        let mut session = ConversationSession::new(Arc::new(ConstantProvider("ok")));
        session.send("hi").await;
        session.clear();
        assert!(session.history().is_empty());
        assert!(session.model().is_none());
    }

    #[tokio::test]
    async fn test_independent_sessions_do_not_share_history() {
        let provider: Arc<dyn ResponseProvider> = Arc::new(ConstantProvider("ok"));
        let mut first = ConversationSession::new(provider.clone());
        let second = ConversationSession::new(provider);

        first.send("hi").await;

        assert_eq!(first.history().len(), 2);
        assert!(second.history().is_empty());
    }
}
