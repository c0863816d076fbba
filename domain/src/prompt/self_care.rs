//! Fixed prompts behind the self-care tools.

use crate::core::error::DomainError;

/// Prompt for the positive affirmation tool
pub const AFFIRMATION_PROMPT: &str =
    "Give a short, encouraging affirmation for someone feeling down.";

/// Prompt for the guided meditation tool
pub const MEDITATION_PROMPT: &str = "Give a 5-minute guided meditation script for stress relief.";

/// The self-care tools offered next to the chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelfCareKind {
    Affirmation,
    Meditation,
}

impl SelfCareKind {
    /// Built-in prompt for this tool
    pub fn default_prompt(&self) -> &'static str {
        match self {
            SelfCareKind::Affirmation => AFFIRMATION_PROMPT,
            SelfCareKind::Meditation => MEDITATION_PROMPT,
        }
    }

    /// Heading shown above the generated text
    pub fn title(&self) -> &'static str {
        match self {
            SelfCareKind::Affirmation => "Affirmation",
            SelfCareKind::Meditation => "Guided Meditation",
        }
    }

    /// Message shown while the model is generating
    pub fn pending_message(&self) -> &'static str {
        match self {
            SelfCareKind::Affirmation => "Fetching a warm affirmation...",
            SelfCareKind::Meditation => "Preparing a calming session...",
        }
    }
}

impl std::str::FromStr for SelfCareKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "affirmation" | "affirm" => Ok(SelfCareKind::Affirmation),
            "meditation" | "meditate" => Ok(SelfCareKind::Meditation),
            other => Err(DomainError::UnknownSelfCareTool(other.to_string())),
        }
    }
}
