//! Order management: creation, filtered listing, lifecycle actions.
//!
//! Orders move pending -> accepted -> delivering -> completed; acceptance
//! is first-wins via a status-guarded UPDATE.

pub mod handlers;
pub mod models;
pub mod service;

// Re-export commonly used types
pub use models::{
    CreatedOrder, NewOrder, OrderAction, OrderFilter, OrderStatus, OrderType, OrderView,
};
pub use service::OrderService;
