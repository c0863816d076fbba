//! Runtime behavior configuration.

use healthchat_domain::SelfCareKind;
use std::time::Duration;

/// Application behavior configuration.
///
/// Controls runtime behavior of use cases like timeout limits for model calls.
/// No timeout is applied by default.
#[derive(Debug, Clone, Default)]
pub struct BehaviorConfig {
    /// Maximum time to wait for a model response before giving up.
    pub timeout: Option<Duration>,
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.map(Duration::from_secs),
        }
    }
}

/// Prompts used by the self-care tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfCarePrompts {
    pub affirmation: String,
    pub meditation: String,
}

impl Default for SelfCarePrompts {
    fn default() -> Self {
        Self {
            affirmation: SelfCareKind::Affirmation.default_prompt().to_string(),
            meditation: SelfCareKind::Meditation.default_prompt().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_from_seconds() {
        assert_eq!(BehaviorConfig::default().timeout, None);
        assert_eq!(
            BehaviorConfig::from_timeout_seconds(Some(30)).timeout,
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn test_default_prompts() {
        let prompts = SelfCarePrompts::default();
        assert_eq!(prompts.affirmation, healthchat_domain::AFFIRMATION_PROMPT);
        assert_eq!(prompts.meditation, healthchat_domain::MEDITATION_PROMPT);
    }
}
