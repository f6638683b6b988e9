//! OpenAPI / Swagger UI documentation.
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::account::handlers::{AuthRequest, LoginResponse, RegisterResponse, UserListResponse};
use crate::account::models::{AccountSummary, AccountView, Role};
use crate::error::ErrorBody;
use crate::gateway::handlers::HealthResponse;
use crate::orders::handlers::{
    CreateOrderRequest, CreateOrderResponse, OrderListResponse, UpdateOrderRequest,
    UpdateOrderResponse,
};
use crate::orders::models::{OrderStatus, OrderType, OrderView};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fleetline API",
        version = "1.0.0",
        description = "Courier marketplace backend: accounts, delivery orders and ratings.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::account::handlers::auth_post,
        crate::account::handlers::auth_get,
        crate::orders::handlers::create_order,
        crate::orders::handlers::list_orders,
        crate::orders::handlers::update_order,
    ),
    components(
        schemas(
            HealthResponse,
            AuthRequest,
            RegisterResponse,
            LoginResponse,
            UserListResponse,
            AccountView,
            AccountSummary,
            Role,
            CreateOrderRequest,
            CreateOrderResponse,
            OrderListResponse,
            UpdateOrderRequest,
            UpdateOrderResponse,
            OrderView,
            OrderStatus,
            OrderType,
            ErrorBody,
        )
    ),
    tags(
        (name = "Accounts", description = "Registration, login and account lookup"),
        (name = "Orders", description = "Order creation, listing and lifecycle actions"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "Fleetline API");
        assert_eq!(spec.info.version, "1.0.0");
    }

    #[test]
    fn test_openapi_json_serializable() {
        let json = ApiDoc::openapi().to_json();
        assert!(json.is_ok());
        assert!(json.unwrap().contains("Fleetline API"));
    }

    #[test]
    fn test_routes_registered() {
        let spec = ApiDoc::openapi();
        assert!(spec.paths.paths.contains_key("/auth"));
        assert!(spec.paths.paths.contains_key("/orders"));
        assert!(spec.paths.paths.contains_key("/health"));
    }
}
