//! User input value object

use super::error::DomainError;

/// Text submitted by the user for one chat turn (Value Object)
///
/// Guarantees the content is not empty or whitespace-only, so a
/// conversation session is never asked to send a blank turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    content: String,
}

impl UserInput {
    /// Try to create user input, returning None if blank
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        let content = content.into();
        if content.trim().is_empty() {
            None
        } else {
            Some(Self { content })
        }
    }

    /// Get the input content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for UserInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<&str> for UserInput {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        UserInput::try_new(s).ok_or(DomainError::EmptyInput)
    }
}

impl TryFrom<String> for UserInput {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        UserInput::try_new(s).ok_or(DomainError::EmptyInput)
    }
}
