//! Axum-specific error types and mappings.
//!
//! Errors are rendered as JSON `{error, status}` with the matching status
//! code. Source errors from the repository port map to 502 unless they
//! describe a local configuration problem.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_core::SourceError;
use serde::Serialize;
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Missing or wrong shared secret.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request (invalid input).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The upstream repository source failed.
    #[error("Bad gateway: {0}")]
    BadGateway(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::BadGateway(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    status: u16,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            Self::Unauthorized(msg)
            | Self::BadRequest(msg)
            | Self::BadGateway(msg)
            | Self::Internal(msg) => msg,
        };

        let body = ErrorBody {
            error: message,
            status: status.as_u16(),
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<SourceError> for HttpError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Configuration { message } => {
                Self::Internal(format!("Config: {message}"))
            }
            other => Self::BadGateway(other.to_string()),
        }
    }
}
