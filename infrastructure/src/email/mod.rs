//! Email provider adapters
//!
//! - [`resend::ResendEmailSender`]: Resend-compatible REST API over reqwest

pub mod resend;
