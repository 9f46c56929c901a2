//! Activity roster endpoints.
//!
//! GET    /activities
//! POST   /activities/:activity_name/signup?email=...
//! DELETE /activities/:activity_name/unregister?email=...
//!
//! Activity names arrive percent-decoded, so "Tennis Club" works the same as
//! "Soccer".

use axum::{
    extract::{Extension, Path, Query},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::common::{ApiError, AppState};
use crate::domains::activities::ActivityMap;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    /// Student email
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// List every activity with its roster
pub async fn list_activities_handler(Extension(state): Extension<AppState>) -> Json<ActivityMap> {
    Json(state.directory.list().await)
}

/// Sign a student up for an activity
pub async fn signup_handler(
    Extension(state): Extension<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let participants = state
        .directory
        .signup(&activity_name, &query.email)
        .await
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, error = %e, "Signup rejected");
            ApiError::from(e)
        })?;

    info!(
        activity = %activity_name,
        email = %query.email,
        participants,
        "Student signed up"
    );

    Ok(Json(MessageResponse {
        message: format!("Signed up {} for {}", query.email, activity_name),
    }))
}

/// Remove a student from an activity
pub async fn unregister_handler(
    Extension(state): Extension<AppState>,
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
) -> Result<Json<MessageResponse>, ApiError> {
    let participants = state
        .directory
        .unregister(&activity_name, &query.email)
        .await
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, error = %e, "Unregister rejected");
            ApiError::from(e)
        })?;

    info!(
        activity = %activity_name,
        email = %query.email,
        participants,
        "Student unregistered"
    );

    Ok(Json(MessageResponse {
        message: format!("Unregistered {} from {}", query.email, activity_name),
    }))
}
