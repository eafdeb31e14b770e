//! Domain layer for atelier-contact
//!
//! This crate contains the inquiry model, the shared validation schema and the
//! multi-step form state machine. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Inquiry
//!
//! The structured data collected by the contact form. It exists for one form
//! session and one outbound request, and is never persisted.
//!
//! - [`InquiryDraft`]: raw wire/form shape, every field optional
//! - [`Inquiry`]: a draft that passed the schema
//!
//! ## Form State Machine
//!
//! [`FormState`] walks four fixed steps and tracks the submission lifecycle
//! (`Editing` → `Submitting` → `Submitted` | `Failed`).

pub mod config;
pub mod core;
pub mod email;
pub mod form;
pub mod inquiry;

// Re-export commonly used types
pub use config::ContactSchema;
pub use core::error::DomainError;
pub use email::{
    format::{
        DEFAULT_FROM_ADDRESS, inquiry_body, inquiry_subject, message_body, message_subject,
    },
    outgoing::OutgoingEmail,
};
pub use form::{
    state::{FormError, FormState, SubmissionStatus},
    step::FormStep,
};
pub use inquiry::{
    entities::{DateRangeDraft, Inquiry, InquiryDraft, InquiryField},
    message::{ContactMessage, MessageDraft, MessageField},
    validation::{FieldError, ValidationErrors, is_valid_email},
    value_objects::{DateRange, ProjectType, ReferralSource},
};
