//! Progress reporting for CLI

use crate::application::ResolveProgressCallback;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;

/// Progress reporter using indicatif
pub struct ProgressReporter {
    bar: Arc<ProgressBar>,
}

impl ProgressReporter {
    /// Creates a progress reporter for a resolve run
    ///
    /// The length is unknown until the source directory has been listed;
    /// the callback sets it.
    pub fn for_resolve() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg}\n{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} files ({eta})")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        bar.set_message("Comparing directories...".to_string());

        Self { bar: Arc::new(bar) }
    }

    /// Creates a reporter that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: Arc::new(ProgressBar::hidden()),
        }
    }

    /// Finishes with a message
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }

    /// Removes the bar without a final message
    pub fn abandon(&self) {
        self.bar.finish_and_clear();
    }

    /// Gets a callback for resolve progress
    pub fn resolve_callback(&self) -> ResolveProgressCallback {
        let bar = Arc::clone(&self.bar);
        Box::new(move |current: usize, total: usize| {
            bar.set_length(total as u64);
            bar.set_position(current as u64);
        })
    }
}
