//! Error responses
//!
//! Every failure maps to a fixed, generic message. Provider and parse
//! details are logged by the relay and never reach the response.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use contact_application::RelayError;
use contact_domain::ValidationErrors;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid fields")]
    InvalidFields(ValidationErrors),

    #[error("Failed to send message")]
    Internal,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingFields | ApiError::InvalidFields(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::MissingFields(_) => ApiError::MissingFields,
            RelayError::Invalid(errors) => ApiError::InvalidFields(errors),
            RelayError::Send(_) => ApiError::Internal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            ApiError::InvalidFields(details) => json!({
                "error": self.to_string(),
                "details": details,
            }),
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}
