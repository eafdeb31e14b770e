//! Submission progress port
//!
//! Lets the presentation layer show a "Sending..." indicator while a form
//! submission is in flight.

use contact_domain::SubmissionStatus;

/// Callback for submission lifecycle updates
pub trait SubmissionProgress: Send + Sync {
    /// Called right before the request is sent
    fn on_submit_start(&self);

    /// Called once the request settles, whichever way
    fn on_submit_settled(&self, status: &SubmissionStatus);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SubmissionProgress for NoProgress {
    fn on_submit_start(&self) {}
    fn on_submit_settled(&self, _status: &SubmissionStatus) {}
}
