//! Simple contact message (`{ name, email, message }`)

use crate::core::string::non_blank;
use crate::inquiry::validation::{NAME_MIN_CHARS, ValidationErrors, is_valid_email, min_chars};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageField {
    Name,
    Email,
    Message,
}

impl MessageField {
    pub const ALL: [MessageField; 3] = [MessageField::Name, MessageField::Email, MessageField::Message];

    pub fn wire_name(&self) -> &'static str {
        match self {
            MessageField::Name => "name",
            MessageField::Email => "email",
            MessageField::Message => "message",
        }
    }
}

/// Unvalidated contact message
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl MessageDraft {
    pub fn missing_required(&self) -> Vec<MessageField> {
        MessageField::ALL
            .into_iter()
            .filter(|f| {
                let value = match f {
                    MessageField::Name => self.name.as_deref(),
                    MessageField::Email => self.email.as_deref(),
                    MessageField::Message => self.message.as_deref(),
                };
                non_blank(value).is_none()
            })
            .collect()
    }

    pub fn validate(&self) -> Result<ContactMessage, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = non_blank(self.name.as_deref()).unwrap_or_default();
        if !min_chars(name, NAME_MIN_CHARS) {
            errors.push("name", "Name must be at least 2 characters.");
        }
        let email = non_blank(self.email.as_deref()).unwrap_or_default();
        if !is_valid_email(email) {
            errors.push("email", "Please enter a valid email address.");
        }
        let message = non_blank(self.message.as_deref()).unwrap_or_default();
        if message.is_empty() {
            errors.push("message", "Please write a message.");
        }

        errors.into_result(|| ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}

/// A validated contact message (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, message: &str) -> MessageDraft {
        MessageDraft {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            message: Some(message.to_string()),
        }
    }

    #[test]
    fn short_message_is_accepted() {
        let msg = draft("Jo", "jo@x.com", "Hi").validate().unwrap();
        assert_eq!(msg.message, "Hi");
    }

    #[test]
    fn missing_fields_are_listed_in_order() {
        let d = MessageDraft {
            email: Some("jo@x.com".to_string()),
            ..Default::default()
        };
        assert_eq!(d.missing_required(), vec![MessageField::Name, MessageField::Message]);
    }

    #[test]
    fn invalid_email_is_rejected() {
        let errors = draft("Jo", "jo@", "Hi").validate().unwrap_err();
        assert_eq!(errors.get("email").unwrap().field, "email");
    }
}
