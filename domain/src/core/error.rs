//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid project type: {0}")]
    InvalidProjectType(String),

    #[error("Invalid referral source: {0}")]
    InvalidReferralSource(String),

    #[error("Invalid contact schema: {0}")]
    InvalidSchema(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid form step: {0}")]
    InvalidStep(u8),
}

impl DomainError {
    /// Check if this error came from parsing user-entered text
    pub fn is_input_error(&self) -> bool {
        !matches!(self, DomainError::InvalidSchema(_))
    }
}
