//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::warn;

/// JSON error body returned by the setters.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Errors surfaced to http clients
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body is missing, is not JSON, or does not fit the expected shape
    #[error("malformed request: {0}")]
    MalformedRequest(#[from] JsonRejection),
    /// The body is valid JSON but not an object
    #[error("malformed request: expected a JSON object, got {0}")]
    NotAnObject(&'static str),
    /// The body is an object but one of its fields has the wrong type
    #[error("malformed request: {0}")]
    InvalidField(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MalformedRequest(rejection) => rejection.status(),
            ApiError::NotAnObject(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidField(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        warn!("rejecting request with {}: {}", status, self);

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
