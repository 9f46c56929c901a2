use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domains::activities::DirectoryError;

/// Errors surfaced to HTTP callers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    /// Request conflicts with current state (reported as 400)
    #[error("{0}")]
    Conflict(String),
}

/// JSON error body: `{"detail": "..."}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::ActivityNotFound { .. } | DirectoryError::NotRegistered { .. } => {
                ApiError::NotFound(err.to_string())
            }
            DirectoryError::AlreadySignedUp { .. } => ApiError::Conflict(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });
        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_errors_map_to_status() {
        let not_found: ApiError = DirectoryError::ActivityNotFound {
            activity: "Chess".to_string(),
        }
        .into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
        assert!(not_found.to_string().to_lowercase().contains("not found"));

        let conflict: ApiError = DirectoryError::AlreadySignedUp {
            activity: "Soccer".to_string(),
            email: "a@mergington.edu".to_string(),
        }
        .into();
        assert_eq!(conflict.status_code(), StatusCode::BAD_REQUEST);
        assert!(conflict
            .to_string()
            .to_lowercase()
            .contains("already signed up"));

        let missing: ApiError = DirectoryError::NotRegistered {
            activity: "Soccer".to_string(),
            email: "a@mergington.edu".to_string(),
        }
        .into();
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert!(missing.to_string().to_lowercase().contains("not registered"));
    }
}
