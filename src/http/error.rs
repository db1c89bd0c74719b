//! HTTP-facing errors.
//!
//! Every failure a request can hit maps to exactly one status code here.
//! Bodies are plain text so clients can show them as-is.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors returned by the request handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bulk-upsert body is not a flat JSON object of strings
    #[error("{0}")]
    MalformedRequestBody(#[from] serde_json::Error),

    /// No value stored under the requested key
    #[error("Key not found")]
    KeyNotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedRequestBody(_) => StatusCode::BAD_REQUEST,
            ApiError::KeyNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}
