//! HTTP error mapping for the task API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::task::services::TaskStoreError;
use crate::wire::ErrorPayload;

/// HTTP-facing error produced by API handlers.
///
/// Validation failures map to `400 Bad Request` carrying the domain
/// message; everything else maps to `500 Internal Server Error` without
/// leaking internals.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    /// Returns the response status code.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the response error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<TaskStoreError> for ApiError {
    fn from(err: TaskStoreError) -> Self {
        match err {
            TaskStoreError::Domain(domain) => Self {
                status: StatusCode::BAD_REQUEST,
                message: domain.to_string(),
            },
            TaskStoreError::Repository(_) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "internal server error".to_owned(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorPayload { error: self.message })).into_response()
    }
}
