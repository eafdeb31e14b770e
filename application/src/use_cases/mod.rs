//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod form_session;
pub mod relay_contact;
