//! Helpers shared between use cases.

use crate::ports::response_provider::ProviderError;

/// Render a provider failure as text that can be shown in place of a reply.
pub fn error_reply(error: &ProviderError) -> String {
    format!("❌ Error: {}", error)
}

/// Returns true if `text` was produced by [`error_reply`].
pub fn is_error_reply(text: &str) -> bool {
    text.starts_with("❌ Error: ")
}
