//! HTTP endpoint
//!
//! Routes:
//! - `POST /api/contact`: relay a submission to the artist's mailbox
//! - `GET /health`: liveness probe
//!
//! Middleware is applied in this order (outermost last):
//! 1. Request deadline (a timeout answers 500 `{"error":"Failed to send message"}`)
//! 2. CORS (when enabled)
//! 3. Request tracing

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod state;

pub use response::ApiError;
pub use state::AppState;

use axum::Router;
use axum::routing::{get, post};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Middleware settings for the router
#[derive(Debug, Clone)]
pub struct ServerOptions {
    pub request_timeout: Duration,
    pub cors_enabled: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            cors_enabled: true,
        }
    }
}

/// Build the application router
pub fn create_app(state: AppState, options: &ServerOptions) -> Router {
    let router = Router::new()
        .route("/api/contact", post(handlers::submit_contact))
        .route("/health", get(handlers::health))
        .with_state(state);

    apply_middleware_stack(router, options)
}

fn apply_middleware_stack(router: Router, options: &ServerOptions) -> Router {
    let router = router.layer(axum::middleware::from_fn_with_state(
        options.request_timeout,
        middleware::enforce_deadline,
    ));
    let router = if options.cors_enabled {
        router.layer(create_cors_layer())
    } else {
        router
    };
    router.layer(TraceLayer::new_for_http())
}

/// The site posts from the browser, so any origin is accepted
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
