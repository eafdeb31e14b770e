//! Relay configuration: how accepted submissions are addressed.

use contact_domain::{ContactSchema, DEFAULT_FROM_ADDRESS};

/// Addressing and payload schema for [`RelayContactUseCase`](crate::use_cases::relay_contact::RelayContactUseCase).
///
/// Resolved once at process start; the handler never reads the environment
/// per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    /// Fixed sender address
    pub from: String,
    /// Destination mailbox
    pub to: String,
    /// Payload shape accepted on the contact endpoint
    pub schema: ContactSchema,
}

impl RelayConfig {
    pub fn new(to: impl Into<String>) -> Self {
        Self {
            from: DEFAULT_FROM_ADDRESS.to_string(),
            to: to.into(),
            schema: ContactSchema::default(),
        }
    }

    // ==================== Builder Methods ====================

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    pub fn with_schema(mut self, schema: ContactSchema) -> Self {
        self.schema = schema;
        self
    }
}
