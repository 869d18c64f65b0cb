use crate::ui;
use account_check::{ProgressCallback, Verdict};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Progress bar for a username batch
pub struct BatchProgress {
    bar: ProgressBar,
    start_time: Instant,
    verbose: bool,
}

impl BatchProgress {
    /// Create a progress bar sized for `total` usernames
    pub fn new(total: usize, verbose: bool) -> Self {
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg} (ETA: {eta})",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏  ");
        bar.set_style(style);
        bar.set_message("Checking accounts...");

        Self {
            bar,
            start_time: Instant::now(),
            verbose,
        }
    }

    /// Callback advancing the bar once per verdict
    pub fn callback(&self) -> ProgressCallback {
        let bar = self.bar.clone();
        let verbose = self.verbose;
        Box::new(move |position: usize, _total: usize, verdict: &Verdict| {
            bar.set_position(position as u64);
            bar.set_message(format!("@{}", verdict.username()));
            if verbose {
                bar.println(ui::verdict_line(verdict));
            }
        })
    }

    /// Finish the bar and report elapsed time
    pub fn finish(&self, completed: usize, total: usize) {
        let elapsed = format_duration(self.start_time.elapsed());
        if completed == total {
            self.bar.finish_with_message("✅ All accounts checked!");
            ui::success_message(&format!("Checked {completed} accounts in {elapsed}"));
        } else {
            self.bar.abandon_with_message("interrupted");
            ui::warning_message(&format!(
                "Interrupted after {completed} of {total} accounts ({elapsed})"
            ));
        }
    }
}

/// Format a duration in a human-readable way
pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.as_secs();
    if seconds < 60 {
        format!("{seconds} seconds")
    } else if seconds < 3600 {
        format!("{} minutes {} seconds", seconds / 60, seconds % 60)
    } else {
        format!(
            "{hours} hours {minutes} minutes",
            hours = seconds / 3600,
            minutes = (seconds % 3600) / 60
        )
    }
}
