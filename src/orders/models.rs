//! Order types: lifecycle enums and wire/list views.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Order lifecycle. Persisted as lowercase text in `orders.status`.
///
/// pending -> accepted (courier assignment) -> delivering -> completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Delivering,
    Completed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Accepted => "accepted",
            OrderStatus::Delivering => "delivering",
            OrderStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "accepted" => Ok(OrderStatus::Accepted),
            "delivering" => Ok(OrderStatus::Delivering),
            "completed" => Ok(OrderStatus::Completed),
            _ => Err(format!("invalid status: {}", s)),
        }
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Kind of order. `food` orders may carry a restaurant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Delivery,
    Food,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Delivery => "delivery",
            OrderType::Food => "food",
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "delivery" => Ok(OrderType::Delivery),
            "food" => Ok(OrderType::Food),
            _ => Err(format!("invalid order type: {}", s)),
        }
    }
}

impl TryFrom<String> for OrderType {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Mutations allowed through `PUT /orders`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Courier self-assigns a pending order.
    Accept,
    /// Move the order along the lifecycle.
    UpdateStatus,
    /// Client leaves a rating and optional review.
    Rate,
}

impl FromStr for OrderAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accept" => Ok(OrderAction::Accept),
            "updateStatus" => Ok(OrderAction::UpdateStatus),
            "rate" => Ok(OrderAction::Rate),
            _ => Err(format!("invalid action: {}", s)),
        }
    }
}

/// Input for order creation, already validated at the boundary.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub order_type: OrderType,
    pub client_id: Option<i64>,
    pub from_address: String,
    pub to_address: String,
    pub items: serde_json::Value,
    pub restaurant: Option<String>,
}

/// Identifiers assigned on creation.
#[derive(Debug, Clone)]
pub struct CreatedOrder {
    pub id: i64,
    pub order_number: String,
}

/// Filters for `GET /orders`; all are AND-combined equality matches.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub client_id: Option<i64>,
    pub courier_id: Option<i64>,
}

/// Wire representation of an order in list responses.
///
/// Mirrors the `orders` row minus `updated_at`, which the listing never
/// exposed.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: i64,
    pub order_number: String,
    #[sqlx(rename = "type", try_from = "String")]
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub client_id: Option<i64>,
    pub courier_id: Option<i64>,
    pub from_address: String,
    pub to_address: String,
    /// Caller-owned payload; stored and returned verbatim.
    #[schema(value_type = Object)]
    pub items: serde_json::Value,
    pub restaurant: Option<String>,
    #[sqlx(try_from = "String")]
    pub status: OrderStatus,
    pub rating: Option<i32>,
    pub review: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Accepted,
            OrderStatus::Delivering,
            OrderStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert!("cancelled".parse::<OrderStatus>().is_err());
        assert!("PENDING".parse::<OrderStatus>().is_err());
        assert!("".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_order_type_roundtrip() {
        assert_eq!("delivery".parse::<OrderType>(), Ok(OrderType::Delivery));
        assert_eq!("food".parse::<OrderType>(), Ok(OrderType::Food));
        assert!("groceries".parse::<OrderType>().is_err());
    }

    #[test]
    fn test_action_vocabulary() {
        assert_eq!("accept".parse::<OrderAction>(), Ok(OrderAction::Accept));
        assert_eq!(
            "updateStatus".parse::<OrderAction>(),
            Ok(OrderAction::UpdateStatus)
        );
        assert_eq!("rate".parse::<OrderAction>(), Ok(OrderAction::Rate));
        // The wire vocabulary is camelCase, exactly as the clients send it.
        assert!("update_status".parse::<OrderAction>().is_err());
        assert!("cancel".parse::<OrderAction>().is_err());
    }

    #[test]
    fn test_order_view_wire_keys() {
        let view = OrderView {
            id: 1,
            order_number: "001".to_string(),
            order_type: OrderType::Food,
            client_id: Some(2),
            courier_id: None,
            from_address: "Mira ave 12".to_string(),
            to_address: "Lenina st 3".to_string(),
            items: serde_json::json!([{"name": "Pizza", "qty": 2}]),
            restaurant: Some("Mario".to_string()),
            status: OrderStatus::Pending,
            rating: None,
            review: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["type"], "food");
        assert_eq!(json["orderNumber"], "001");
        // Unassigned courier serializes as an explicit null.
        assert!(json["courierId"].is_null());
        assert!(json.get("updatedAt").is_none());
        assert!(json.get("createdAt").is_some());
    }
}
