//! Resend email provider adapter
//!
//! Implements [`EmailSender`] against the `POST /emails` endpoint. One client
//! is built at startup and shared by every request.

use async_trait::async_trait;
use contact_application::{DeliveryReceipt, EmailSender, SendError};
use contact_domain::OutgoingEmail;
use contact_domain::core::string::truncate;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Longest provider error text kept in a [`SendError`]
const MAX_ERROR_TEXT: usize = 300;

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
    reply_to: &'a str,
}

impl<'a> From<&'a OutgoingEmail> for SendEmailRequest<'a> {
    fn from(email: &'a OutgoingEmail) -> Self {
        Self {
            from: &email.from,
            to: [&email.to],
            subject: &email.subject,
            text: &email.text,
            reply_to: &email.reply_to,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: Option<String>,
    name: Option<String>,
}

/// Resend REST client
pub struct ResendEmailSender {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ResendEmailSender {
    /// Build the client once. `timeout` bounds each send call.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, SendError> {
        let mut builder = reqwest::Client::builder().user_agent(concat!(
            "atelier-contact/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| SendError::NotConfigured(e.to_string()))?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.base_url)
    }

    fn map_transport_error(e: reqwest::Error) -> SendError {
        if e.is_timeout() {
            SendError::Timeout
        } else {
            SendError::ConnectionError(e.to_string())
        }
    }

    fn rejection_message(body: &str) -> String {
        match serde_json::from_str::<ProviderErrorBody>(body) {
            Ok(ProviderErrorBody {
                message: Some(message),
                name,
            }) => match name {
                Some(name) => format!("{}: {}", name, message),
                None => message,
            },
            _ => truncate(body.trim(), MAX_ERROR_TEXT),
        }
    }
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, SendError> {
        debug!("Sending email to provider: {}", email.subject);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&SendEmailRequest::from(email))
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = Self::rejection_message(&body);
            warn!("Provider rejected message: HTTP {} {}", status.as_u16(), message);
            return Err(SendError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SendEmailResponse = response
            .json()
            .await
            .map_err(|e| SendError::InvalidResponse(e.to_string()))?;

        Ok(DeliveryReceipt { id: parsed.id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::HeaderMap, http::StatusCode, routing::post};
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};
    use tokio::net::TcpListener;

    // ==================== Fake provider ====================

    type Captured = Arc<Mutex<Vec<(Option<String>, Value)>>>;

    async fn spawn_provider(status: StatusCode, reply: Value) -> (String, Captured) {
        let captured: Captured = Arc::new(Mutex::new(Vec::new()));
        let sink = captured.clone();
        let app = Router::new().route(
            "/emails",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let sink = sink.clone();
                let reply = reply.clone();
                async move {
                    let auth = headers
                        .get("authorization")
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string);
                    sink.lock().unwrap().push((auth, body));
                    (status, Json(reply))
                }
            }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}", addr), captured)
    }

    fn email() -> OutgoingEmail {
        OutgoingEmail::new(
            "Contact Form <onboarding@resend.dev>",
            "studio@example.com",
            "New Project Inquiry from Jo",
            "Name: Jo\n",
        )
        .with_reply_to("jo@x.com")
    }

    #[tokio::test]
    async fn sends_one_request_with_bearer_key() {
        let (base_url, captured) = spawn_provider(StatusCode::OK, json!({ "id": "msg_123" })).await;
        let sender = ResendEmailSender::new("re_test", format!("{}/", base_url), None).unwrap();

        let receipt = sender.send(&email()).await.unwrap();
        assert_eq!(receipt, DeliveryReceipt::with_id("msg_123"));

        let captured = captured.lock().unwrap();
        assert_eq!(captured.len(), 1);
        let (auth, body) = &captured[0];
        assert_eq!(auth.as_deref(), Some("Bearer re_test"));
        assert_eq!(body["to"], json!(["studio@example.com"]));
        assert_eq!(body["reply_to"], "jo@x.com");
        assert_eq!(body["subject"], "New Project Inquiry from Jo");
    }

    #[tokio::test]
    async fn provider_rejection_keeps_status_and_message() {
        let (base_url, _) = spawn_provider(
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({ "name": "validation_error", "message": "Invalid `to` field" }),
        )
        .await;
        let sender = ResendEmailSender::new("re_test", base_url, None).unwrap();

        match sender.send(&email()).await {
            Err(SendError::Rejected { status, message }) => {
                assert_eq!(status, 422);
                assert_eq!(message, "validation_error: Invalid `to` field");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn unreachable_provider_is_a_connection_error() {
        // Bind then drop to get a port nothing listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let sender = ResendEmailSender::new("re_test", format!("http://{}", addr), None).unwrap();
        assert!(matches!(
            sender.send(&email()).await,
            Err(SendError::ConnectionError(_))
        ));
    }

    #[test]
    fn rejection_message_falls_back_to_raw_text() {
        assert_eq!(ResendEmailSender::rejection_message(" Bad Gateway "), "Bad Gateway");
        assert_eq!(
            ResendEmailSender::rejection_message(r#"{"message":"Rate limited"}"#),
            "Rate limited"
        );
    }
}
