//! Progress display for batch map generation

use crate::io::configuration::{MIN_MAPS_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Maps: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many maps of a batch are finished
///
/// Single-map runs stay silent; larger batches get one progress bar.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a progress display for `map_count` maps
    pub fn new(map_count: usize) -> Self {
        let bar = (map_count >= MIN_MAPS_FOR_PROGRESS).then(|| {
            let bar = ProgressBar::new(map_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            bar
        });
        Self { bar }
    }

    /// Whether a bar is being drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Record one finished map
    pub fn complete_map(&self, seed: u64) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("seed {seed}"));
            bar.inc(1);
        }
    }

    /// Number of maps recorded so far
    pub fn completed(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_with_message("all maps generated");
        }
    }
}
