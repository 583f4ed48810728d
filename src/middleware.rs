//! Request ID middleware for correlating logs with requests.
//!
//! Wraps each request in a tracing span carrying a UUID v4 request ID, so all
//! log lines emitted while handling a request can be correlated.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Middleware that wraps the request in a span recording the request ID,
/// method, and path, and logs completion with status and duration.
///
/// This should be the outermost layer so the span covers all request
/// processing.
pub async fn request_span_layer(request: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
    );

    let start = Instant::now();

    async move {
        let response = next.run(request).await;

        tracing::info!(
            status = response.status().as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );

        response
    }
    .instrument(span)
    .await
}
