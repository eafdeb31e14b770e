//! HTTP inquiry transport
//!
//! The form client's side of `POST /api/contact`: one request, JSON body.

use async_trait::async_trait;
use contact_application::{InquiryTransport, TransportError};
use contact_domain::Inquiry;
use contact_domain::core::string::truncate;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const MAX_ERROR_TEXT: usize = 200;

/// Error body returned by the submission handler
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Posts inquiries to the submission handler over HTTP
pub struct HttpInquiryTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpInquiryTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TransportError::ConnectionError(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl InquiryTransport for HttpInquiryTransport {
    async fn submit(&self, inquiry: &Inquiry) -> Result<(), TransportError> {
        debug!("POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(inquiry)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TransportError::Timeout
                } else {
                    TransportError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(b) => b.error,
            Err(_) if body.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string(),
            Err(_) => truncate(body.trim(), MAX_ERROR_TEXT),
        };
        Err(TransportError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
