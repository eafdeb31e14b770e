//! Route handlers

use crate::server::response::ApiError;
use crate::server::state::AppState;
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde::Serialize;
use tracing::error;

#[derive(Debug, Serialize)]
pub struct SentResponse {
    message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
}

/// `POST /api/contact`
///
/// The body is read raw and parsed with the mounted schema so that a
/// malformed payload lands in the same 500 path as a provider failure.
pub async fn submit_contact(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SentResponse>, ApiError> {
    let submission = state.relay.parse(&body).map_err(|e| {
        error!("Error sending message: {}", e);
        ApiError::Internal
    })?;

    state.relay.execute(submission).await?;

    Ok(Json(SentResponse {
        message: "Message sent successfully",
    }))
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
