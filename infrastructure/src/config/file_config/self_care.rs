//! Self-care tool configuration from TOML (`[self_care]` section)

use healthchat_application::SelfCarePrompts;
use serde::{Deserialize, Serialize};

/// Raw self-care configuration from TOML
///
/// Unset prompts fall back to the built-in ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSelfCareConfig {
    pub affirmation_prompt: Option<String>,
    pub meditation_prompt: Option<String>,
}

impl FileSelfCareConfig {
    pub fn to_prompts(&self) -> SelfCarePrompts {
        let defaults = SelfCarePrompts::default();
        SelfCarePrompts {
            affirmation: self
                .affirmation_prompt
                .clone()
                .unwrap_or(defaults.affirmation),
            meditation: self
                .meditation_prompt
                .clone()
                .unwrap_or(defaults.meditation),
        }
    }
}
