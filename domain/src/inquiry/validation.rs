//! Shared validation schema.
//!
//! The same rules run in the terminal form before submit and in the
//! submission handler before anything is forwarded to the email provider.
//!
//! # Examples
//!
//! ```
//! use contact_domain::is_valid_email;
//!
//! assert!(is_valid_email("jo@x.com"));
//! assert!(!is_valid_email("jo@x"));
//! ```

use crate::form::step::FormStep;
use crate::inquiry::entities::InquiryField;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

pub const NAME_MIN_CHARS: usize = 2;
pub const LOCATION_MIN_CHARS: usize = 2;
pub const VISION_MIN_CHARS: usize = 10;
pub const VISION_MAX_CHARS: usize = 500;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Check email-address syntax.
///
/// The local part may not start with `.` or contain `..`.
pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

/// A single failed rule, keyed by the wire name of the field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All rule failures for one draft
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// First error for a field, if any
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    /// Errors for fields rendered on the given form step
    pub fn for_step(&self, step: FormStep) -> Vec<&FieldError> {
        self.0
            .iter()
            .filter(|e| InquiryField::from_wire_name(e.field).map(|f| f.step()) == Some(step))
            .collect()
    }

    /// The earliest step holding an error
    pub fn first_step(&self) -> Option<FormStep> {
        self.0
            .iter()
            .filter_map(|e| InquiryField::from_wire_name(e.field).map(|f| f.step()))
            .min()
    }

    /// `Ok(value)` when no rule failed
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() { Ok(value()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|e| e.to_string()).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Minimum length check in characters
pub(crate) fn min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Maximum length check in characters
pub(crate) fn max_chars(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}
