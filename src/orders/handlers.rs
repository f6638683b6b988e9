//! HTTP handlers for `/orders`.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::models::{NewOrder, OrderAction, OrderFilter, OrderStatus, OrderType, OrderView};
use crate::error::{ApiError, ErrorBody};
use crate::gateway::handlers::non_empty;
use crate::gateway::state::AppState;

/// Body of `POST /orders`.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// `delivery` or `food`.
    #[serde(rename = "type")]
    pub order_type: Option<String>,
    pub client_id: Option<i64>,
    pub from_address: Option<String>,
    pub to_address: Option<String>,
    /// Arbitrary JSON; stored verbatim.
    #[schema(value_type = Object)]
    pub items: Option<serde_json::Value>,
    /// Food orders only.
    pub restaurant: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub success: bool,
    pub order_id: i64,
    pub order_number: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderListResponse {
    pub orders: Vec<OrderView>,
}

/// Body of `PUT /orders`. `action` selects which extra fields apply.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    pub order_id: Option<i64>,
    /// `accept`, `updateStatus` or `rate`.
    pub action: Option<String>,
    /// accept: the courier taking the order.
    pub courier_id: Option<i64>,
    /// updateStatus: target lifecycle status.
    pub status: Option<String>,
    /// rate: 1..5 in the clients, stored as sent.
    pub rating: Option<i32>,
    pub review: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateOrderResponse {
    pub success: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOrdersQuery {
    pub status: Option<String>,
    pub client_id: Option<String>,
    pub courier_id: Option<String>,
}

/// Create a pending order.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order created", body = CreateOrderResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<CreateOrderResponse>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::validation(e.body_text()))?;

    let (Some(raw_type), Some(from_address), Some(to_address)) = (
        non_empty(&req.order_type),
        non_empty(&req.from_address),
        non_empty(&req.to_address),
    ) else {
        return Err(ApiError::validation(
            "type, fromAddress, toAddress and items are required",
        ));
    };
    let items = match req.items {
        Some(items) if !items.is_null() => items,
        _ => {
            return Err(ApiError::validation(
                "type, fromAddress, toAddress and items are required",
            ));
        }
    };
    let order_type = raw_type.parse::<OrderType>().map_err(ApiError::Validation)?;

    let created = state
        .orders
        .create_order(NewOrder {
            order_type,
            client_id: req.client_id,
            from_address: from_address.to_string(),
            to_address: to_address.to_string(),
            items,
            restaurant: req.restaurant.clone(),
        })
        .await?;

    Ok(Json(CreateOrderResponse {
        success: true,
        order_id: created.id,
        order_number: created.order_number,
    }))
}

/// List orders, optionally filtered by status, client or courier.
#[utoipa::path(
    get,
    path = "/orders",
    params(
        ("status" = Option<String>, Query, description = "pending | accepted | delivering | completed"),
        ("clientId" = Option<String>, Query, description = "Orders created by this client"),
        ("courierId" = Option<String>, Query, description = "Orders assigned to this courier")
    ),
    responses(
        (status = 200, description = "Matching orders, newest first", body = OrderListResponse),
        (status = 400, description = "Unparseable filter value", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<OrderListResponse>, ApiError> {
    let filter = OrderFilter {
        status: non_empty(&query.status)
            .map(|raw| raw.parse::<OrderStatus>().map_err(ApiError::Validation))
            .transpose()?,
        client_id: parse_id_filter(&query.client_id, "clientId")?,
        courier_id: parse_id_filter(&query.courier_id, "courierId")?,
    };

    let orders = state.orders.list_orders(filter).await?;
    Ok(Json(OrderListResponse { orders }))
}

/// Mutate an order: accept it, move its status, or rate it.
#[utoipa::path(
    put,
    path = "/orders",
    request_body = UpdateOrderRequest,
    responses(
        (status = 200, description = "Update applied", body = UpdateOrderResponse),
        (status = 400, description = "Unknown action or invalid fields", body = ErrorBody),
        (status = 404, description = "No order with that id", body = ErrorBody)
    ),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<Arc<AppState>>,
    body: Result<Json<UpdateOrderRequest>, JsonRejection>,
) -> Result<Json<UpdateOrderResponse>, ApiError> {
    let Json(req) = body.map_err(|e| ApiError::validation(e.body_text()))?;

    let (Some(order_id), Some(raw_action)) = (req.order_id, non_empty(&req.action)) else {
        return Err(ApiError::validation("orderId and action required"));
    };
    let action = raw_action
        .parse::<OrderAction>()
        .map_err(ApiError::Validation)?;

    match action {
        OrderAction::Accept => {
            let courier_id = req
                .courier_id
                .ok_or_else(|| ApiError::validation("courierId required for accept"))?;
            state.orders.accept_order(order_id, courier_id).await?;
        }
        OrderAction::UpdateStatus => {
            let status = non_empty(&req.status)
                .ok_or_else(|| ApiError::validation("status required for updateStatus"))?
                .parse::<OrderStatus>()
                .map_err(ApiError::Validation)?;
            state.orders.update_status(order_id, status).await?;
        }
        OrderAction::Rate => {
            let rating = req
                .rating
                .ok_or_else(|| ApiError::validation("rating required for rate"))?;
            let review = req.review.as_deref().unwrap_or("");
            state.orders.rate_order(order_id, rating, review).await?;
        }
    }

    Ok(Json(UpdateOrderResponse { success: true }))
}

fn parse_id_filter(raw: &Option<String>, field: &str) -> Result<Option<i64>, ApiError> {
    non_empty(raw)
        .map(|v| {
            v.parse::<i64>()
                .map_err(|_| ApiError::validation(format!("invalid {}", field)))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_wire_shape() {
        let req: CreateOrderRequest = serde_json::from_str(
            r#"{"type":"food","clientId":5,"fromAddress":"A","toAddress":"B",
                "items":[{"name":"Pizza"}],"restaurant":"Mario"}"#,
        )
        .unwrap();
        assert_eq!(req.order_type.as_deref(), Some("food"));
        assert_eq!(req.client_id, Some(5));
        assert!(req.items.unwrap().is_array());
    }

    #[test]
    fn test_update_request_accepts_each_action_shape() {
        let accept: UpdateOrderRequest =
            serde_json::from_str(r#"{"orderId":1,"action":"accept","courierId":99}"#).unwrap();
        assert_eq!(accept.courier_id, Some(99));

        let status: UpdateOrderRequest =
            serde_json::from_str(r#"{"orderId":1,"action":"updateStatus","status":"delivering"}"#)
                .unwrap();
        assert_eq!(status.status.as_deref(), Some("delivering"));

        let rate: UpdateOrderRequest =
            serde_json::from_str(r#"{"orderId":1,"action":"rate","rating":5,"review":"ok"}"#)
                .unwrap();
        assert_eq!(rate.rating, Some(5));
    }

    #[test]
    fn test_id_filter_parsing() {
        assert_eq!(parse_id_filter(&None, "clientId").unwrap(), None);
        // Empty string means "no filter", as the web client sends it.
        assert_eq!(
            parse_id_filter(&Some(String::new()), "clientId").unwrap(),
            None
        );
        assert_eq!(
            parse_id_filter(&Some("42".to_string()), "clientId").unwrap(),
            Some(42)
        );
        assert!(parse_id_filter(&Some("abc".to_string()), "clientId").is_err());
    }
}
