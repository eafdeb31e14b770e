//! Progress reporting for form submission

use colored::Colorize;
use contact_application::SubmissionProgress;
use contact_domain::SubmissionStatus;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a "Sending..." spinner while the request is in flight
pub struct SubmitSpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl SubmitSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for SubmitSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionProgress for SubmitSpinner {
    fn on_submit_start(&self) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Sending...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_submit_settled(&self, status: &SubmissionStatus) {
        let Some(pb) = self.bar.lock().ok().and_then(|mut bar| bar.take()) else {
            return;
        };
        match status {
            SubmissionStatus::Submitted => {
                pb.finish_with_message(format!("{} Sent", "v".green()));
            }
            SubmissionStatus::Failed { .. } => {
                pb.finish_with_message(format!("{} Not sent", "x".red()));
            }
            _ => pb.finish_and_clear(),
        }
    }
}
