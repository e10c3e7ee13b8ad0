// file: src/presentation/progress.rs
// description: spinner shown while a model call is outstanding
// reference: uses indicatif for progress bars

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub struct WaitIndicator {
    spinner: ProgressBar,
}

impl WaitIndicator {
    pub fn with_color(message: &str, colored: bool) -> Self {
        let spinner = ProgressBar::new_spinner();
        let template = if colored {
            "{spinner:.green} {msg} [{elapsed}]"
        } else {
            "{spinner} {msg} [{elapsed}]"
        };
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template(template)
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));

        Self { spinner }
    }

    /// A spinner that draws nothing, for `--json` output.
    pub fn hidden() -> Self {
        Self {
            spinner: ProgressBar::hidden(),
        }
    }

    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl Drop for WaitIndicator {
    fn drop(&mut self) {
        self.finish();
    }
}
