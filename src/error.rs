//! Crate-wide error taxonomy.
//!
//! Every failure a handler can produce is one of these variants, and every
//! variant maps to exactly one HTTP status. Handlers return
//! `Result<_, ApiError>` and let axum run the conversion at the boundary.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input. The message is shown to the caller.
    #[error("{0}")]
    Validation(String),

    /// Phone/password or QR token did not match any account.
    #[error("invalid credentials")]
    Authentication,

    /// A referenced record does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// The route exists but not for this HTTP method.
    #[error("method not supported")]
    MethodNotAllowed,

    /// Database failure. Logged in full, reported opaquely.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Anything else that must never reach the caller verbatim.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Authentication => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body of every non-2xx response: `{"error": "..."}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        let error = if status.is_server_error() {
            // Full detail stays in the log; callers get an opaque body.
            tracing::error!("request failed: {self}");
            "internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(
            ApiError::validation("bad").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Authentication.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::NotFound("user").http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MethodNotAllowed.http_status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_caller_visible_messages() {
        assert_eq!(
            ApiError::validation("phone and password required").to_string(),
            "phone and password required"
        );
        assert_eq!(ApiError::Authentication.to_string(), "invalid credentials");
        assert_eq!(ApiError::NotFound("order").to_string(), "order not found");
        assert_eq!(
            ApiError::MethodNotAllowed.to_string(),
            "method not supported"
        );
    }
}
