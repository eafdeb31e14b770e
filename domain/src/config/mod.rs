//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod contact_schema;

pub use contact_schema::ContactSchema;
