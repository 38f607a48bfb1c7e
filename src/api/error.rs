//! API error taxonomy and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Errors surfaced by the HTTP layer.
///
/// The service reports not-found with sentinel results; handlers convert
/// absence and invalid input into these variants. No other error kinds are
/// modeled.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or out-of-range input. Maps to 400.
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// An operation referenced an unknown task id. Maps to 404.
    #[error("task {0} not found")]
    TaskNotFound(Uuid),
}

impl ApiError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation { field, .. } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.to_string(), "field": field }),
            ),
            Self::TaskNotFound(_) => {
                (StatusCode::NOT_FOUND, json!({ "error": self.to_string() }))
            }
        };
        (status, Json(body)).into_response()
    }
}
