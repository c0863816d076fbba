//! Domain layer for healthchat
//!
//! This crate contains the conversation entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Message / Role**: a single turn in a conversation
//! - **ConversationHistory**: the ordered, append-only list of turns
//! - **UserInput**: validated, non-empty text typed by the user
//! - **Model**: identifier of the locally hosted language model
//! - **Self-care prompts**: the fixed prompts behind the affirmation and
//!   meditation tools

pub mod core;
pub mod prompt;
pub mod session;

// Re-export commonly used types
pub use self::core::{error::DomainError, input::UserInput, model::Model, string::truncate};
pub use prompt::self_care::{AFFIRMATION_PROMPT, MEDITATION_PROMPT, SelfCareKind};
pub use session::{
    entities::{Message, Role},
    history::ConversationHistory,
};
