//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] - the locally hosted model (tinyllama, llama3.2, ...)
//! - [`input::UserInput`] - validated user text for a chat turn
//! - [`error::DomainError`] - domain-level errors

pub mod error;
pub mod input;
pub mod model;
pub mod string;
