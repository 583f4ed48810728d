//! Health check endpoint for container orchestration.
//!
//! A liveness probe: returns 200 OK with a static JSON body whenever the
//! process can answer HTTP. Used by Kubernetes, ECS, systemd, and load
//! balancers to verify the service is alive.

use axum::Json;
use serde::Serialize;

use crate::config::SERVICE_NAME;

/// Health check response body.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        service: SERVICE_NAME,
    })
}
