//! Contact schema value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which payload shape the contact endpoint accepts
///
/// Two incompatible shapes exist for `POST /api/contact`. Exactly one is
/// mounted at a time; they are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactSchema {
    /// Multi-field project inquiry (canonical)
    #[default]
    Inquiry,
    /// Simple `{ name, email, message }` contact message
    Message,
}

impl fmt::Display for ContactSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactSchema::Inquiry => write!(f, "inquiry"),
            ContactSchema::Message => write!(f, "message"),
        }
    }
}

impl std::str::FromStr for ContactSchema {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inquiry" | "project" => Ok(ContactSchema::Inquiry),
            "message" | "simple" => Ok(ContactSchema::Message),
            _ => Err(DomainError::InvalidSchema(s.to_string())),
        }
    }
}
