//! Batch progress display for multi-file composition

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for batch composition runs
///
/// Shows a single bar across all files with the name of the file
/// currently being composed as the message.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager with no bar attached yet
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Initialize the batch bar for the given number of files
    pub fn initialize(&mut self, file_count: usize) {
        let bar = ProgressBar::new(file_count as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = Some(bar);
    }

    /// Display the file currently being composed
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_message(display_name);
        }
    }

    /// Mark the current file as completed
    pub fn complete_file(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("All files processed");
        }
    }
}
