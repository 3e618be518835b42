//! Terminal progress display across the ring sizes of one run

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SIZE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Rings: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks which ring sizes have been attempted
///
/// Shows one bar advancing per size, with the size currently being searched
/// and a tally of solved and unsolved sizes in the message.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    solved: usize,
    unsolved: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bar yet
    pub const fn new() -> Self {
        Self {
            bar: None,
            solved: 0,
            unsolved: 0,
        }
    }

    /// Create the bar for `size_count` ring sizes
    pub fn initialize(&mut self, size_count: usize) {
        let bar = ProgressBar::new(size_count as u64);
        bar.set_style(SIZE_STYLE.clone());
        self.bar = Some(bar);
        self.solved = 0;
        self.unsolved = 0;
    }

    /// Show that a ring of `size` tiles is being searched
    pub fn start_size(&self, size: usize) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("searching {size} tiles ({})", self.tally()));
        }
    }

    /// Record the outcome for one ring size
    pub fn complete_size(&mut self, size: usize, solved: bool, elapsed: Duration) {
        if solved {
            self.solved += 1;
        } else {
            self.unsolved += 1;
        }

        if let Some(ref bar) = self.bar {
            bar.inc(1);
            bar.set_message(format!(
                "{size} tiles in {:.3}s ({})",
                elapsed.as_secs_f64(),
                self.tally()
            ));
        }
    }

    /// Number of sizes solved so far
    pub const fn solved(&self) -> usize {
        self.solved
    }

    /// Number of sizes with no ring so far
    pub const fn unsolved(&self) -> usize {
        self.unsolved
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }

    fn tally(&self) -> String {
        format!("{} solved, {} unsolved", self.solved, self.unsolved)
    }
}
