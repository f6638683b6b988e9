//! Cross-cutting gateway handlers and boundary helpers.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use super::state::AppState;
use crate::db;
use crate::error::ApiError;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Liveness probe: checks the database with a `SELECT 1`.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and database reachable", body = HealthResponse),
        (status = 500, description = "Database unreachable")
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, ApiError> {
    db::ping(&state.pool).await?;
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// The clients treat empty strings and absent fields the same, both in
/// JSON bodies and query strings.
pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some("x".to_string())), Some("x"));
        // Whitespace is not trimmed; only the empty string means absent.
        assert_eq!(non_empty(&Some(" ".to_string())), Some(" "));
    }
}
