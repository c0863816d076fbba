//! Application layer for healthchat
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{BehaviorConfig, SelfCarePrompts};
pub use ports::{
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    response_provider::{ProviderError, ResponseProvider, TimeoutProvider},
};
pub use use_cases::conversation_session::ConversationSession;
pub use use_cases::memoized_prompt::MemoizedPromptRunner;
pub use use_cases::self_care::SelfCareTools;
pub use use_cases::shared::{error_reply, is_error_reply};
