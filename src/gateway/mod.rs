//! HTTP gateway: router assembly and CORS policy.

pub mod handlers;
pub mod openapi;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, Method, header};
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::account;
use crate::orders;
use state::AppState;

/// Permissive CORS, mirroring what the serverless original allowed:
/// any origin, the three business methods plus preflight, and the
/// `X-User-Id` header the mobile clients attach.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-user-id")])
}

/// Build the application router.
///
/// Each business route registers an explicit method set; anything else on
/// the same path falls through to a 405 instead of axum's default 404.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/auth",
            post(account::handlers::auth_post)
                .get(account::handlers::auth_get)
                .fallback(handlers::method_not_allowed),
        )
        .route(
            "/orders",
            post(orders::handlers::create_order)
                .get(orders::handlers::list_orders)
                .put(orders::handlers::update_order)
                .fallback(handlers::method_not_allowed),
        )
        .route("/health", get(handlers::health_check))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}
