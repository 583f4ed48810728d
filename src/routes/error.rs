//! Canned error endpoint for failure-injection testing.
//!
//! The 500 returned here is not a real fault. It is a fixed response that
//! lets external tooling (alerting, log scraping, chaos harnesses) exercise
//! their own error-handling paths against a live service.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Canned error response body.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: &'static str,
}

/// Always returns 500 with a fixed message.
pub async fn error() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            message: "Intentional error for testing",
        }),
    )
}
