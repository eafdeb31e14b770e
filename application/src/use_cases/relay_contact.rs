//! Relay Contact use case
//!
//! The logic behind `POST /api/contact`: check presence, run the shared
//! schema, format a plain-text email and hand it to the provider exactly once.

use crate::config::RelayConfig;
use crate::ports::email_sender::{DeliveryReceipt, EmailSender, SendError};
use contact_domain::{
    ContactSchema, InquiryDraft, MessageDraft, OutgoingEmail, ValidationErrors, inquiry_body,
    inquiry_subject, message_body, message_subject,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors that can occur while relaying a submission
#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid fields: {0}")]
    Invalid(ValidationErrors),

    #[error("Send failed: {0}")]
    Send(#[from] SendError),
}

impl RelayError {
    /// Whether the caller is at fault (400) rather than the relay (500)
    pub fn is_client_error(&self) -> bool {
        matches!(self, RelayError::MissingFields(_) | RelayError::Invalid(_))
    }
}

/// A payload received on the contact endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactSubmission {
    Inquiry(InquiryDraft),
    Message(MessageDraft),
}

impl ContactSubmission {
    /// Parse a JSON body according to the mounted schema
    pub fn parse(schema: ContactSchema, body: &[u8]) -> Result<Self, serde_json::Error> {
        match schema {
            ContactSchema::Inquiry => serde_json::from_slice(body).map(ContactSubmission::Inquiry),
            ContactSchema::Message => serde_json::from_slice(body).map(ContactSubmission::Message),
        }
    }
}

/// Use case for relaying a contact submission to the email provider
pub struct RelayContactUseCase {
    sender: Arc<dyn EmailSender>,
    config: RelayConfig,
}

impl RelayContactUseCase {
    pub fn new(sender: Arc<dyn EmailSender>, config: RelayConfig) -> Self {
        Self { sender, config }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Parse a raw request body with the configured schema
    pub fn parse(&self, body: &[u8]) -> Result<ContactSubmission, serde_json::Error> {
        ContactSubmission::parse(self.config.schema, body)
    }

    /// Execute the use case
    pub async fn execute(
        &self,
        submission: ContactSubmission,
    ) -> Result<DeliveryReceipt, RelayError> {
        let email = self.prepare(&submission)?;

        info!("Relaying contact submission: {}", email.subject);
        match self.sender.send(&email).await {
            Ok(receipt) => {
                debug!("Provider accepted message {:?}", receipt.id);
                Ok(receipt)
            }
            Err(e) => {
                error!("Error sending message: {}", e);
                Err(RelayError::Send(e))
            }
        }
    }

    /// Validate and format without sending
    fn prepare(&self, submission: &ContactSubmission) -> Result<OutgoingEmail, RelayError> {
        match submission {
            ContactSubmission::Inquiry(draft) => {
                let missing = draft.missing_required();
                if !missing.is_empty() {
                    let names: Vec<_> = missing.iter().map(|f| f.wire_name()).collect();
                    warn!("Rejecting inquiry, missing: {}", names.join(", "));
                    return Err(RelayError::MissingFields(names));
                }
                let inquiry = draft.validate().map_err(|e| {
                    warn!("Rejecting inquiry: {}", e);
                    RelayError::Invalid(e)
                })?;
                Ok(self
                    .envelope(inquiry_subject(&inquiry), inquiry_body(&inquiry))
                    .with_reply_to(inquiry.email))
            }
            ContactSubmission::Message(draft) => {
                let missing = draft.missing_required();
                if !missing.is_empty() {
                    let names: Vec<_> = missing.iter().map(|f| f.wire_name()).collect();
                    warn!("Rejecting message, missing: {}", names.join(", "));
                    return Err(RelayError::MissingFields(names));
                }
                let message = draft.validate().map_err(|e| {
                    warn!("Rejecting message: {}", e);
                    RelayError::Invalid(e)
                })?;
                Ok(self
                    .envelope(message_subject(&message), message_body(&message))
                    .with_reply_to(message.email))
            }
        }
    }

    fn envelope(&self, subject: String, text: String) -> OutgoingEmail {
        OutgoingEmail::new(&self.config.from, &self.config.to, subject, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contact_domain::{DEFAULT_FROM_ADDRESS, DateRangeDraft, InquiryField};
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    #[derive(Default)]
    struct RecordingSender {
        sent: Mutex<Vec<OutgoingEmail>>,
        fail: bool,
    }

    impl RecordingSender {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        fn sent(&self) -> Vec<OutgoingEmail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EmailSender for RecordingSender {
        async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, SendError> {
            self.sent.lock().unwrap().push(email.clone());
            if self.fail {
                Err(SendError::Rejected {
                    status: 422,
                    message: "domain not verified".to_string(),
                })
            } else {
                Ok(DeliveryReceipt::with_id("msg_1"))
            }
        }
    }

    fn use_case(sender: &Arc<RecordingSender>, schema: ContactSchema) -> RelayContactUseCase {
        let config = RelayConfig::new("studio@example.com").with_schema(schema);
        RelayContactUseCase::new(sender.clone(), config)
    }

    fn inquiry_draft() -> InquiryDraft {
        InquiryDraft {
            name: Some("Jo".to_string()),
            email: Some("jo@x.com".to_string()),
            phone: None,
            project_type: Some("Event".to_string()),
            date_range: Some(DateRangeDraft {
                from: Some("2024-06-01".to_string()),
                to: Some("2024-06-03".to_string()),
            }),
            location: Some("Tampere".to_string()),
            vision: Some("Gala evening, classic red lip".to_string()),
            referral_source: Some("Website".to_string()),
        }
    }

    // ==================== Presence ====================

    #[tokio::test]
    async fn missing_fields_never_reach_the_provider() {
        let sender = Arc::new(RecordingSender::default());
        let relay = use_case(&sender, ContactSchema::Inquiry);

        for field in InquiryField::ALL.into_iter().filter(|f| f.is_required()) {
            let mut draft = inquiry_draft();
            draft.set(field, "");
            let err = relay
                .execute(ContactSubmission::Inquiry(draft))
                .await
                .unwrap_err();
            match err {
                RelayError::MissingFields(names) => assert_eq!(names, vec![field.wire_name()]),
                other => panic!("expected missing fields, got {:?}", other),
            }
        }
        assert!(sender.sent().is_empty());
    }

    #[tokio::test]
    async fn malformed_email_is_rejected_server_side() {
        let sender = Arc::new(RecordingSender::default());
        let relay = use_case(&sender, ContactSchema::Inquiry);
        let draft = InquiryDraft {
            email: Some("not-an-address".to_string()),
            ..inquiry_draft()
        };

        let err = relay.execute(ContactSubmission::Inquiry(draft)).await.unwrap_err();
        assert!(matches!(err, RelayError::Invalid(_)));
        assert!(err.is_client_error());
        assert!(sender.sent().is_empty());
    }

    // ==================== Success path ====================

    #[tokio::test]
    async fn well_formed_inquiry_is_sent_once() {
        let sender = Arc::new(RecordingSender::default());
        let relay = use_case(&sender, ContactSchema::Inquiry);

        let receipt = relay
            .execute(ContactSubmission::Inquiry(inquiry_draft()))
            .await
            .unwrap();
        assert_eq!(receipt.id.as_deref(), Some("msg_1"));

        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        let email = &sent[0];
        assert_eq!(email.reply_to, "jo@x.com");
        assert!(email.subject.contains("Jo"));
        assert_eq!(email.from, DEFAULT_FROM_ADDRESS);
        assert_eq!(email.to, "studio@example.com");
        assert!(email.text.contains("2024-06-01 - 2024-06-03"));
    }

    #[tokio::test]
    async fn simple_message_is_sent_once() {
        let sender = Arc::new(RecordingSender::default());
        let relay = use_case(&sender, ContactSchema::Message);
        let submission = relay
            .parse(br#"{"name":"Jo","email":"jo@x.com","message":"Hi"}"#)
            .unwrap();

        relay.execute(submission).await.unwrap();
        let sent = sender.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "New Contact Form Message from Jo");
        assert_eq!(sent[0].reply_to, "jo@x.com");
    }

    // ==================== Failure path ====================

    #[tokio::test]
    async fn provider_failure_is_a_server_error() {
        let sender = Arc::new(RecordingSender::failing());
        let relay = use_case(&sender, ContactSchema::Inquiry);

        let err = relay
            .execute(ContactSubmission::Inquiry(inquiry_draft()))
            .await
            .unwrap_err();
        assert!(matches!(err, RelayError::Send(SendError::Rejected { status: 422, .. })));
        assert!(!err.is_client_error());
        assert_eq!(sender.sent().len(), 1);
    }

    #[test]
    fn parse_follows_the_mounted_schema() {
        let body = br#"{"name":"Jo","email":"jo@x.com","message":"Hi"}"#;
        assert!(matches!(
            ContactSubmission::parse(ContactSchema::Message, body).unwrap(),
            ContactSubmission::Message(_)
        ));
        // Unknown keys are ignored, so the inquiry schema sees an incomplete draft
        match ContactSubmission::parse(ContactSchema::Inquiry, body).unwrap() {
            ContactSubmission::Inquiry(draft) => assert!(!draft.missing_required().is_empty()),
            other => panic!("expected inquiry, got {:?}", other),
        }
        assert!(ContactSubmission::parse(ContactSchema::Inquiry, b"not json").is_err());
    }
}
