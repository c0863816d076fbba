//! Self-care tools: the affirmation and meditation prompts.

use crate::config::SelfCarePrompts;
use crate::ports::response_provider::ResponseProvider;
use crate::use_cases::memoized_prompt::MemoizedPromptRunner;
use healthchat_domain::SelfCareKind;
use std::sync::Arc;

/// One memoized runner per self-care tool, backed by the same provider.
pub struct SelfCareTools {
    affirmation: MemoizedPromptRunner,
    meditation: MemoizedPromptRunner,
}

impl SelfCareTools {
    /// Tools using the built-in prompts
    pub fn new(provider: Arc<dyn ResponseProvider>) -> Self {
        Self::with_prompts(provider, &SelfCarePrompts::default())
    }

    pub fn with_prompts(provider: Arc<dyn ResponseProvider>, prompts: &SelfCarePrompts) -> Self {
        Self {
            affirmation: MemoizedPromptRunner::new(prompts.affirmation.clone(), provider.clone()),
            meditation: MemoizedPromptRunner::new(prompts.meditation.clone(), provider),
        }
    }

    pub fn runner(&self, kind: SelfCareKind) -> &MemoizedPromptRunner {
        match kind {
            SelfCareKind::Affirmation => &self.affirmation,
            SelfCareKind::Meditation => &self.meditation,
        }
    }

    pub async fn run(&self, kind: SelfCareKind) -> String {
        self.runner(kind).run().await
    }

    pub async fn affirmation(&self) -> String {
        self.affirmation.run().await
    }

    pub async fn meditation(&self) -> String {
        self.meditation.run().await
    }
}
