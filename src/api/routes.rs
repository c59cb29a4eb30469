//! Application route configuration.

use axum::{response::Json, routing::get, Router};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{address_routes, cart_routes, product_routes, user_routes};
use super::openapi::ApiDoc;
use super::AppState;
use crate::types::Welcome;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(user_routes())
        .merge(address_routes())
        .merge(product_routes())
        .merge(cart_routes())
        // Global middleware
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Root endpoint
async fn root() -> Welcome {
    Welcome
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Liveness check; the store lives in process, so there is nothing else to probe
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}
