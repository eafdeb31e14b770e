//! Request middleware

use crate::server::response::ApiError;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::time::Duration;
use tracing::error;

/// Answer with the generic 500 body when a request outlives `limit`
pub async fn enforce_deadline(
    State(limit): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            error!("Error sending message: {} timed out after {:?}", path, limit);
            ApiError::Internal.into_response()
        }
    }
}
