use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to the caller. Every failure carries a stable code and a
/// human-readable message; nothing is retried or swallowed.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Amount missing, non-numeric, or not strictly positive. Detected
    /// locally before any call to the payment processor.
    #[error("{0}")]
    InvalidArgument(String),
    /// Any error surfaced by the payment processor, message propagated
    /// verbatim.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidArgument(_) => "invalid-argument",
            ApiError::Internal(_) => "internal",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "code": self.code(),
            "message": self.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}
