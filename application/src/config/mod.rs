//! Application-level configuration.
//!
//! - [`BehaviorConfig`] - timeout applied around model calls
//! - [`SelfCarePrompts`] - prompt text behind the self-care tools

pub mod behavior;

pub use behavior::{BehaviorConfig, SelfCarePrompts};
