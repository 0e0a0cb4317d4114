//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use homehub_app::error::Rejection;
use homehub_domain::time::{self, Timestamp};

/// JSON error body returned by API endpoints.
///
/// Carries the numeric status, the server-side timestamp of the refusal,
/// the canonical error message, and the locale-rendered detail.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub timestamp: Timestamp,
    pub message: String,
    pub detail: String,
}

/// Maps a [`Rejection`] to an HTTP response with appropriate status code.
pub struct ApiError(Rejection);

impl From<Rejection> for ApiError {
    fn from(rejection: Rejection) -> Self {
        Self(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
        tracing::debug!(error = %self.0.error, "request rejected");
        let body = ErrorBody {
            status: status.as_u16(),
            timestamp: time::now(),
            message: self.0.error.to_string(),
            detail: self.0.detail,
        };
        (status, Json(body)).into_response()
    }
}
