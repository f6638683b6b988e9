//! Account types shared by the service and the gateway.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Account role. Persisted as lowercase text in `users.role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Places orders.
    Client,
    /// Accepts and delivers orders; carries a QR pickup token.
    Courier,
    /// Back-office account, no special server-side powers yet.
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::Courier => "courier",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Role::Client),
            "courier" => Ok(Role::Courier),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("invalid role: {}", s)),
        }
    }
}

// For sqlx `try_from = "String"` when decoding the text column.
impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Full `users` row. Never serialized; the hash stays inside the service.
#[derive(Debug, Clone, FromRow)]
pub struct AccountRecord {
    pub id: i64,
    pub phone: String,
    pub password_hash: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub name: String,
    pub qr_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Single-account view (`GET /auth?userId=`): includes the QR token.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub id: i64,
    pub phone: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub name: String,
    pub qr_code: Option<String>,
}

/// List entry (`GET /auth`): carries the creation time, never the QR token.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: i64,
    pub phone: String,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Identity established by a successful login.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedAccount {
    pub id: i64,
    pub phone: String,
    pub role: Role,
    pub name: String,
}

impl From<AccountRecord> for AuthenticatedAccount {
    fn from(rec: AccountRecord) -> Self {
        Self {
            id: rec.id,
            phone: rec.phone,
            role: rec.role,
            name: rec.name,
        }
    }
}

/// Outcome of a registration.
#[derive(Debug, Clone)]
pub struct RegisteredAccount {
    pub id: i64,
    pub role: Role,
    /// Set iff the account is a courier.
    pub qr_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in [Role::Client, Role::Courier, Role::Admin] {
            assert_eq!(role.as_str().parse::<Role>(), Ok(role));
        }
    }

    #[test]
    fn test_role_rejects_unknown() {
        assert!("dispatcher".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
        // Vocabulary is exact, not case-folded.
        assert!("Client".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Courier).unwrap(), "\"courier\"");
    }

    #[test]
    fn test_summary_omits_qr_token() {
        let summary = AccountSummary {
            id: 7,
            phone: "+15550001".to_string(),
            role: Role::Courier,
            name: "Kai".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("qrCode").is_none());
        assert!(json.get("createdAt").is_some());
    }
}
