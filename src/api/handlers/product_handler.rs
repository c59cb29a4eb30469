//! Product handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::{JsonBody, PathParams};
use crate::api::AppState;
use crate::domain::Product;
use crate::errors::AppResult;
use crate::types::Ack;

/// Create product routes
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/produto/", post(create_product))
        .route(
            "/produto/:id_produto/",
            get(get_product).delete(delete_product),
        )
}

/// Add a product to the catalog
#[utoipa::path(
    post,
    path = "/produto/",
    tag = "Products",
    request_body = Product,
    responses(
        (status = 200, description = "Product created, body is \"OK\"", body = String),
        (status = 400, description = "Negative price, body is \"FALHA\""),
        (status = 409, description = "Id already taken, body is \"FALHA\"")
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(product): JsonBody<Product>,
) -> AppResult<Ack> {
    state.product_service.create_product(product).await?;
    Ok(Ack)
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/produto/{id_produto}/",
    tag = "Products",
    params(("id_produto" = i64, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found, body is \"FALHA\"")
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    PathParams(product_id): PathParams<i64>,
) -> AppResult<Json<Product>> {
    let product = state.product_service.get_product(product_id).await?;
    Ok(Json(product))
}

/// Delete a product and take it out of every cart
#[utoipa::path(
    delete,
    path = "/produto/{id_produto}/",
    tag = "Products",
    params(("id_produto" = i64, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product deleted, body is \"OK\"", body = String),
        (status = 404, description = "Product not found, body is \"FALHA\"")
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    PathParams(product_id): PathParams<i64>,
) -> AppResult<Ack> {
    state.product_service.delete_product(product_id).await?;
    Ok(Ack)
}
