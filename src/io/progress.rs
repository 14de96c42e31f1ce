//! Progress display for batches of trials

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static TRIAL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} trials ({{elapsed_precise}})"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar shared by the worker threads of one experiment run
///
/// Cloning is cheap and every clone ticks the same bar.
#[derive(Clone)]
pub struct TrialProgress {
    bar: ProgressBar,
}

impl TrialProgress {
    /// Create a bar for `total` trials labelled with the experiment name
    pub fn new(name: &str, total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(TRIAL_STYLE.clone());
        bar.set_message(name.to_string());
        Self { bar }
    }

    /// Mark one trial as completed
    pub fn inc(&self) {
        self.bar.inc(1);
    }

    /// Trials completed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Total trials in the run
    pub fn length(&self) -> Option<u64> {
        self.bar.length()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
