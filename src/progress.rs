//! Spinner display for network fetches

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown on stderr while a request is in flight
///
/// Hidden when stderr is not a terminal, so piped and test output stays clean.
pub struct FetchSpinner {
    pb: ProgressBar,
}

impl FetchSpinner {
    /// Start a spinner with the given message
    pub fn start(message: impl Into<String>) -> Self {
        let pb = if console::Term::stderr().is_term() {
            ProgressBar::new_spinner()
        } else {
            ProgressBar::hidden()
        };

        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb }
    }

    /// Stop and clear the spinner
    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }

    /// Stop the spinner, leaving it in place
    pub fn abandon(&self) {
        self.pb.abandon();
    }
}

impl Drop for FetchSpinner {
    fn drop(&mut self) {
        if !self.pb.is_finished() {
            self.pb.finish_and_clear();
        }
    }
}
