//! Version report endpoint for deployment verification.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::SERVICE_NAME;
use crate::state::AppState;

/// Version response body.
#[derive(Serialize)]
pub struct VersionResponse {
    pub service: &'static str,
    pub version: String,
}

/// Reports the version string the service was started with.
pub async fn version(State(state): State<AppState>) -> Json<VersionResponse> {
    Json(VersionResponse {
        service: SERVICE_NAME,
        version: state.config.version.clone(),
    })
}
