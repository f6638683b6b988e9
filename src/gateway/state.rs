use sqlx::PgPool;

use crate::account::AccountService;
use crate::orders::OrderService;

/// Shared gateway state, handed to every handler as `Arc<AppState>`.
#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
    pub orders: OrderService,
    /// Kept for the health probe; the services hold their own clones.
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            accounts: AccountService::new(pool.clone()),
            orders: OrderService::new(pool.clone()),
            pool,
        }
    }
}
