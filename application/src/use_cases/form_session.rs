//! Form session use case
//!
//! Drives the [`FormState`] machine for one inquirer and performs the single
//! submission through an [`InquiryTransport`].

use crate::ports::inquiry_transport::InquiryTransport;
use crate::ports::progress::{NoProgress, SubmissionProgress};
use contact_domain::{
    FieldError, FormError, FormState, FormStep, InquiryDraft, InquiryField, SubmissionStatus,
};
use std::sync::Arc;
use tracing::{error, info};

/// One inquirer's pass through the multi-step form
pub struct FormSession<T: InquiryTransport + ?Sized> {
    transport: Arc<T>,
    state: FormState,
    draft: InquiryDraft,
}

impl<T: InquiryTransport + ?Sized> FormSession<T> {
    pub fn new(transport: Arc<T>) -> Self {
        Self {
            transport,
            state: FormState::new(),
            draft: InquiryDraft::with_form_defaults(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn step(&self) -> FormStep {
        self.state.step()
    }

    pub fn draft(&self) -> &InquiryDraft {
        &self.draft
    }

    /// Update one field from text input
    pub fn set_field(&mut self, field: InquiryField, input: &str) {
        self.draft.set(field, input);
    }

    pub fn next(&mut self) -> FormStep {
        self.state.next()
    }

    pub fn previous(&mut self) -> FormStep {
        self.state.previous()
    }

    pub fn jump_to(&mut self, step: FormStep) -> FormStep {
        self.state.jump_to(step)
    }

    /// Current rule failures for the fields on the active step.
    ///
    /// Validation runs continuously but only blocks the final submit.
    pub fn step_errors(&self) -> Vec<FieldError> {
        match self.draft.validate() {
            Ok(_) => Vec::new(),
            Err(errors) => errors
                .for_step(self.state.step())
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    /// Submit with default (no-op) progress
    pub async fn submit(&mut self) -> Result<SubmissionStatus, FormError> {
        self.submit_with_progress(&NoProgress).await
    }

    /// Validate, send one request and record how it settled.
    ///
    /// Transport failures are not returned as errors: they move the form
    /// into [`SubmissionStatus::Failed`] so the inquirer can retry.
    pub async fn submit_with_progress(
        &mut self,
        progress: &dyn SubmissionProgress,
    ) -> Result<SubmissionStatus, FormError> {
        let inquiry = self.state.begin_submit(&self.draft)?;

        info!("Submitting inquiry for {}", inquiry.name);
        progress.on_submit_start();

        let outcome = self.transport.submit(&inquiry).await.map_err(|e| {
            error!("Error submitting form: {}", e);
            e.to_string()
        });

        let status = self.state.settle(outcome).clone();
        progress.on_submit_settled(&status);
        Ok(status)
    }
}
