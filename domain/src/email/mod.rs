//! Outbound email domain.
//!
//! - [`outgoing::OutgoingEmail`]: what gets handed to the email provider
//! - [`format`]: subject lines and plain-text bodies

pub mod format;
pub mod outgoing;
