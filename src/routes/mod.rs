//! HTTP route handlers.
//!
//! All three endpoints are static: each request is handled independently and
//! repeated identical requests yield byte-identical responses. Responses carry
//! `Cache-Control: no-store` so health-checking tooling never sees a cached
//! probe result.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request.

pub mod error;
pub mod health;
pub mod version;

use axum::{
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_PROBE;
use crate::middleware::request_span_layer;
use crate::state::AppState;

/// Fallback handler for undefined paths.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "message": "Not Found" })),
    )
}

/// Creates the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/version", get(version::version))
        .route("/error", get(error::error))
        .fallback(not_found)
        .with_state(state)
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PROBE),
        ))
        // Request ID middleware - creates root span for log correlation
        .layer(middleware::from_fn(request_span_layer))
}
