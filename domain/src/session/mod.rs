//! Conversation session domain.
//!
//! - [`entities::Message`] - a single turn within a conversation
//! - [`history::ConversationHistory`] - the ordered list of turns

pub mod entities;
pub mod history;
