//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Message cannot be empty")]
    EmptyInput,

    #[error("Invalid model: {0}")]
    InvalidModel(String),

    #[error("Unknown self-care tool: {0}")]
    UnknownSelfCareTool(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DomainError::EmptyInput.to_string(), "Message cannot be empty");
        assert_eq!(
            DomainError::InvalidModel(" ".to_string()).to_string(),
            "Invalid model:  "
        );
    }
}
