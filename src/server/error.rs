//! Translation from verification errors to HTTP responses.
//!
//! The HTTP layer is the sole place where internal failure kinds become
//! status codes; nothing below it catches or rewrites an error.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::github::VerificationError;

/// JSON body returned for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    pub error: String,
}

/// Response wrapper carrying a [`VerificationError`] out of a handler.
#[derive(Debug)]
pub struct ApiError(VerificationError);

impl From<VerificationError> for ApiError {
    fn from(error: VerificationError) -> Self {
        Self(error)
    }
}

/// Maps each failure kind onto its HTTP status.
fn status_for(error: &VerificationError) -> StatusCode {
    match error {
        VerificationError::InvalidUrl(_)
        | VerificationError::MissingPathSegments
        | VerificationError::NotScriptBased => StatusCode::BAD_REQUEST,
        VerificationError::RepositoryNotFound { .. } => StatusCode::NOT_FOUND,
        VerificationError::MissingToken | VerificationError::Authentication { .. } => {
            StatusCode::UNAUTHORIZED
        }
        VerificationError::Api { .. } | VerificationError::Network { .. } => {
            StatusCode::BAD_GATEWAY
        }
        VerificationError::Configuration { .. } | VerificationError::Io { .. } => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
