//! Outgoing email value object

use serde::Serialize;

/// A single plain-text email to relay (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub reply_to: String,
}

impl OutgoingEmail {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        subject: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        let from = from.into();
        Self {
            reply_to: from.clone(),
            from,
            to: to.into(),
            subject: subject.into(),
            text: text.into(),
        }
    }

    pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = reply_to.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_to_defaults_to_sender() {
        let email = OutgoingEmail::new("a@studio.fi", "b@studio.fi", "Hi", "Body");
        assert_eq!(email.reply_to, "a@studio.fi");
        let email = email.with_reply_to("jo@x.com");
        assert_eq!(email.reply_to, "jo@x.com");
    }
}
