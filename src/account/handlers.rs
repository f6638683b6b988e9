//! HTTP handlers for `/auth`.
//!
//! One POST route multiplexes register/login through an `action` field,
//! matching what the mobile clients already send; GET serves either a single
//! account or the full listing depending on `userId`.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::models::{AccountSummary, Role};
use crate::error::{ApiError, ErrorBody};
use crate::gateway::handlers::non_empty;
use crate::gateway::state::AppState;

/// Body of `POST /auth`. Fields beyond `action` are mode-specific;
/// absent and empty strings are treated the same.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
    /// `register` or `login`.
    pub action: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    /// Registration only; defaults to `client`.
    pub role: Option<String>,
    /// Registration only; defaults to empty.
    pub name: Option<String>,
    /// Login only: courier QR token, takes precedence over phone/password.
    pub qr_code: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub user_id: i64,
    pub role: Role,
    /// Null unless the new account is a courier.
    pub qr_code: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub success: bool,
    pub user_id: i64,
    pub phone: String,
    pub role: Role,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<AccountSummary>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthQuery {
    pub user_id: Option<String>,
}

/// Register a new account or log in.
#[utoipa::path(
    post,
    path = "/auth",
    request_body = AuthRequest,
    responses(
        (status = 200, description = "Registration result or authenticated identity"),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 401, description = "Credentials rejected", body = ErrorBody)
    ),
    tag = "Accounts"
)]
pub async fn auth_post(
    State(state): State<Arc<AppState>>,
    body: Result<Json<AuthRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::validation(e.body_text()))?;

    match req.action.as_deref() {
        Some("register") => register(&state, &req).await,
        Some("login") => login(&state, &req).await,
        _ => Err(ApiError::validation("invalid action")),
    }
}

async fn register(state: &AppState, req: &AuthRequest) -> Result<Response, ApiError> {
    let (Some(phone), Some(password)) = (non_empty(&req.phone), non_empty(&req.password)) else {
        return Err(ApiError::validation("phone and password required"));
    };
    let role = match non_empty(&req.role) {
        Some(raw) => raw.parse::<Role>().map_err(ApiError::Validation)?,
        None => Role::Client,
    };
    let name = req.name.as_deref().unwrap_or("");

    let account = state.accounts.register(phone, password, role, name).await?;
    Ok(Json(RegisterResponse {
        success: true,
        user_id: account.id,
        role: account.role,
        qr_code: account.qr_code,
    })
    .into_response())
}

async fn login(state: &AppState, req: &AuthRequest) -> Result<Response, ApiError> {
    let account = if let Some(qr_code) = non_empty(&req.qr_code) {
        state.accounts.login_with_qr(qr_code).await?
    } else if let (Some(phone), Some(password)) = (non_empty(&req.phone), non_empty(&req.password))
    {
        state.accounts.login_with_password(phone, password).await?
    } else {
        return Err(ApiError::validation("phone and password or qrCode required"));
    };

    Ok(Json(LoginResponse {
        success: true,
        user_id: account.id,
        phone: account.phone,
        role: account.role,
        name: account.name,
    })
    .into_response())
}

/// Fetch one account by id, or list all accounts.
#[utoipa::path(
    get,
    path = "/auth",
    params(
        ("userId" = Option<String>, Query, description = "Return a single account instead of the listing")
    ),
    responses(
        (status = 200, description = "Account view or account list"),
        (status = 404, description = "No account with that id", body = ErrorBody)
    ),
    tag = "Accounts"
)]
pub async fn auth_get(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AuthQuery>,
) -> Result<Response, ApiError> {
    match non_empty(&query.user_id) {
        Some(raw) => {
            let id: i64 = raw
                .parse()
                .map_err(|_| ApiError::validation("invalid userId"))?;
            let account = state.accounts.get_account(id).await?;
            Ok(Json(account).into_response())
        }
        None => {
            let users = state.accounts.list_accounts().await?;
            Ok(Json(UserListResponse { users }).into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_request_accepts_partial_bodies() {
        let req: AuthRequest = serde_json::from_str(r#"{"action":"login","qrCode":"tok"}"#).unwrap();
        assert_eq!(req.action.as_deref(), Some("login"));
        assert_eq!(req.qr_code.as_deref(), Some("tok"));
        assert!(req.phone.is_none());
    }

    #[test]
    fn test_auth_request_ignores_unknown_fields() {
        let req: AuthRequest =
            serde_json::from_str(r#"{"action":"register","phone":"+1","password":"x","device":"ios"}"#)
                .unwrap();
        assert_eq!(req.action.as_deref(), Some("register"));
    }

    #[test]
    fn test_register_response_includes_null_qr() {
        let resp = RegisterResponse {
            success: true,
            user_id: 3,
            role: Role::Client,
            qr_code: None,
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["userId"], 3);
        // Clients key off the field being present, even when null.
        assert!(json["qrCode"].is_null());
        assert!(json.as_object().unwrap().contains_key("qrCode"));
    }
}
