//! Application layer for atelier-contact
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::RelayConfig;
pub use ports::{
    email_sender::{DeliveryReceipt, EmailSender, SendError},
    inquiry_transport::{InquiryTransport, TransportError},
    progress::{NoProgress, SubmissionProgress},
};
pub use use_cases::form_session::FormSession;
pub use use_cases::relay_contact::{ContactSubmission, RelayContactUseCase, RelayError};
