//! Inquiry domain.
//!
//! - [`entities::InquiryDraft`]: raw form/wire shape
//! - [`entities::Inquiry`]: a validated inquiry
//! - [`message::MessageDraft`]: the simple three-field contact message
//! - [`validation`]: the shared schema used by both client and server

pub mod entities;
pub mod message;
pub mod validation;
pub mod value_objects;
