//! Progress display for batch collapse runs

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, PROGRESS_TICKS};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch collapse runs
///
/// Each file gets a bar tracking its collapse from full uncertainty to a
/// solved field. Large batches additionally get a file-count bar, and the
/// per-file bars are suppressed to avoid terminal spam.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bar: Option<ProgressBar>,
    show_file_bars: bool,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bar: None,
            show_file_bars: true,
        }
    }

    /// Initialize progress display based on file count
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
            self.show_file_bars = false;
        }
    }

    /// Begin the collapse bar for a new file
    pub fn start_file(&mut self, path: &Path) {
        if !self.show_file_bars {
            return;
        }

        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let bar = ProgressBar::new(PROGRESS_TICKS);
        bar.set_style(FILE_STYLE.clone());
        bar.set_prefix(display_name);
        self.file_bar = Some(self.multi_progress.add(bar));
    }

    /// Report the current collapse progress as a fraction in `0.0..=1.0`
    pub fn update_progress(&mut self, fraction: f32) {
        if let Some(ref bar) = self.file_bar {
            let position = (fraction.clamp(0.0, 1.0) * PROGRESS_TICKS as f32) as u64;
            bar.set_position(position);
            bar.set_message(format!("{:5.1}%", f64::from(fraction) * 100.0));
        }
    }

    /// Mark the current file as completed
    pub fn complete_file(&mut self, elapsed: Duration) {
        if let Some(bar) = self.file_bar.take() {
            bar.set_position(PROGRESS_TICKS);
            bar.finish_with_message(format!("✓ {:.1}s", elapsed.as_secs_f64()));
        }

        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }
}
