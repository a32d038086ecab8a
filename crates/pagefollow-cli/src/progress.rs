use indicatif::{ProgressBar, ProgressStyle};
use pagefollow_core::{ProgressObserver, RunProgress};

/// Terminal progress bar fed by the batch runner's per-item updates.
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} pages ({percent}%)")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish();
    }
}

impl ProgressObserver for BarProgress {
    fn on_progress(&self, progress: RunProgress) {
        self.bar.set_position(progress.completed as u64);
    }
}
