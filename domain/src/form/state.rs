//! Form state machine entity

use crate::form::step::FormStep;
use crate::inquiry::entities::{Inquiry, InquiryDraft};
use crate::inquiry::validation::ValidationErrors;
use thiserror::Error;

/// Submission lifecycle of a form session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    /// Fields are being filled in
    #[default]
    Editing,
    /// A request is in flight; the submit control is disabled
    Submitting,
    /// Accepted by the handler (terminal)
    Submitted,
    /// The last request failed; the reason is shown and a retry is allowed
    Failed { reason: String },
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            SubmissionStatus::Editing => "editing",
            SubmissionStatus::Submitting => "submitting",
            SubmissionStatus::Submitted => "submitted",
            SubmissionStatus::Failed { .. } => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionStatus::Submitted)
    }
}

/// Reasons a submit action is refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Submit is only available on step {}", FormStep::LAST.number())]
    NotOnFinalStep,

    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error("The form has already been submitted")]
    AlreadySubmitted,

    #[error("Some fields need attention: {0}")]
    Invalid(ValidationErrors),
}

/// Step index plus submission status
///
/// Navigation is never gated by validation; the schema only blocks the
/// final submit action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    step: FormStep,
    status: SubmissionStatus,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> FormStep {
        self.step
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitting)
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitted)
    }

    /// Failure reason of the last attempt, if it failed
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            SubmissionStatus::Failed { reason } => Some(reason.as_str()),
            _ => None,
        }
    }

    fn can_navigate(&self) -> bool {
        !matches!(
            self.status,
            SubmissionStatus::Submitting | SubmissionStatus::Submitted
        )
    }

    /// Advance one step; no-op on the last step
    pub fn next(&mut self) -> FormStep {
        if self.can_navigate()
            && let Some(step) = self.step.next()
        {
            self.step = step;
        }
        self.step
    }

    /// Go back one step; no-op on the first step
    pub fn previous(&mut self) -> FormStep {
        if self.can_navigate()
            && let Some(step) = self.step.previous()
        {
            self.step = step;
        }
        self.step
    }

    /// Jump straight to a step via the step selector
    pub fn jump_to(&mut self, step: FormStep) -> FormStep {
        if self.can_navigate() {
            self.step = step;
        }
        self.step
    }

    /// Start a submission.
    ///
    /// Also used to retry after [`SubmissionStatus::Failed`]. On validation
    /// failure the status is left untouched.
    pub fn begin_submit(&mut self, draft: &InquiryDraft) -> Result<Inquiry, FormError> {
        match self.status {
            SubmissionStatus::Submitting => return Err(FormError::AlreadySubmitting),
            SubmissionStatus::Submitted => return Err(FormError::AlreadySubmitted),
            SubmissionStatus::Editing | SubmissionStatus::Failed { .. } => {}
        }
        if !self.step.is_last() {
            return Err(FormError::NotOnFinalStep);
        }
        let inquiry = draft.validate().map_err(FormError::Invalid)?;
        self.status = SubmissionStatus::Submitting;
        Ok(inquiry)
    }

    /// Record how the in-flight request settled. Always clears `Submitting`.
    pub fn settle(&mut self, outcome: Result<(), String>) -> &SubmissionStatus {
        if !self.is_submitting() {
            return &self.status;
        }
        self.status = match outcome {
            Ok(()) => SubmissionStatus::Submitted,
            Err(reason) => SubmissionStatus::Failed { reason },
        };
        &self.status
    }
}
