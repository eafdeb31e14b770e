//! Inquiry transport port
//!
//! How the form client hands a validated inquiry to the submission handler.

use async_trait::async_trait;
use contact_domain::Inquiry;
use thiserror::Error;

/// Errors surfaced to the inquirer after a failed submission
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Could not reach the server: {0}")]
    ConnectionError(String),

    #[error("Server responded {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("The request timed out")]
    Timeout,
}

/// Delivers an inquiry to the submission handler (one POST, JSON body)
#[async_trait]
pub trait InquiryTransport: Send + Sync {
    /// `Ok` only for a 2xx response
    async fn submit(&self, inquiry: &Inquiry) -> Result<(), TransportError>;
}
