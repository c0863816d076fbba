//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod conversation_session;
pub mod memoized_prompt;
pub mod self_care;
pub mod shared;
