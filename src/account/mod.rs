//! Account management: registration, password/QR login, lookups.
//!
//! PostgreSQL-backed; passwords are stored as Argon2id hashes and courier
//! accounts carry a generated QR pickup token.

pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use models::{AccountSummary, AccountView, AuthenticatedAccount, RegisteredAccount, Role};
pub use service::AccountService;
