//! Presentation layer for healthchat
//!
//! This crate contains CLI definitions, output formatters,
//! the thinking spinner, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand};
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::spinner::Spinner;
