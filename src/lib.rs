//! Fleetline - courier marketplace backend.
//!
//! Accounts (clients, couriers, admins) and delivery/food orders over
//! PostgreSQL, served through an axum gateway. The binary in `main.rs`
//! wires config, logging, the pool and the router; everything else lives
//! here so integration tests and tools can drive the services directly.
//!
//! # Modules
//!
//! - [`account`] - registration, password/QR login, account lookup
//! - [`orders`] - order creation, filtered listing, lifecycle actions
//! - [`gateway`] - axum router, shared state, OpenAPI docs
//! - [`config`] - yaml configuration per environment
//! - [`db`] - connection pool setup
//! - [`error`] - crate-wide error taxonomy mapped to HTTP statuses
//! - [`logging`] - tracing subscriber with rotating file output

pub mod account;
pub mod config;
pub mod db;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod orders;

// Convenient re-exports at crate root
pub use account::AccountService;
pub use error::ApiError;
pub use gateway::state::AppState;
pub use orders::OrderService;
