use axum::{extract::Extension, Json};
use serde::{Deserialize, Serialize};

use crate::common::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub activities: usize,
}

/// Health check endpoint
///
/// The directory is in memory, so the service is healthy whenever it can
/// answer; the activity count is reported for quick sanity checks.
pub async fn health_handler(Extension(state): Extension<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        activities: state.directory.len(),
    })
}
