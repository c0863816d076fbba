//! Spinner shown while waiting on the model

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// A spinner on stderr that can be disabled (e.g. with `--quiet`).
///
/// The spinner is cleared when finished or dropped, so it never leaves a
/// trace in the transcript printed to stdout.
pub struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    pub fn start(message: impl Into<String>, enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::style());
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar: Some(bar) }
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    pub fn finish(mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_spinner_is_inert() {
        let spinner = Spinner::start("🧠 Thinking...", false);
        assert!(spinner.bar.is_none());
        spinner.finish();
    }

    #[test]
    fn test_enabled_spinner_finishes() {
        let spinner = Spinner::start("🧠 Thinking...", true);
        assert!(spinner.bar.is_some());
        spinner.finish();
    }
}
