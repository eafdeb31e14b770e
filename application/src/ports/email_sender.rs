//! Email sender port
//!
//! Defines the single operation the submission handler needs from the
//! transactional-email provider.

use async_trait::async_trait;
use contact_domain::OutgoingEmail;
use thiserror::Error;

/// Errors that can occur while handing a message to the provider
///
/// These are logged but never exposed to the caller of the contact endpoint.
#[derive(Error, Debug)]
pub enum SendError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Provider rejected the message (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Sender not configured: {0}")]
    NotConfigured(String),
}

/// What the provider returned for an accepted message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// Provider-side message id, when reported
    pub id: Option<String>,
}

impl DeliveryReceipt {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()) }
    }
}

/// Transactional-email provider
///
/// Delivery guarantees (retries, bounces) belong to the provider.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send one message
    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, SendError>;
}
