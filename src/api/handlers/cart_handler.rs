//! Shopping cart handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::PathParams;
use crate::api::AppState;
use crate::domain::{Cart, CartSummary};
use crate::errors::AppResult;
use crate::types::Ack;

/// Create cart routes
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/carrinho/:id_usuario/",
            get(get_cart).delete(delete_cart),
        )
        .route("/carrinho/:id_usuario/resumo/", get(get_summary))
        .route("/carrinho/:id_usuario/:id_produto/", post(add_to_cart))
}

/// Add a product to a user's cart
#[utoipa::path(
    post,
    path = "/carrinho/{id_usuario}/{id_produto}/",
    tag = "Carts",
    params(
        ("id_usuario" = i64, Path, description = "User identifier"),
        ("id_produto" = i64, Path, description = "Product identifier")
    ),
    responses(
        (status = 200, description = "Product added, body is \"OK\"", body = String),
        (status = 404, description = "User or product not found, body is \"FALHA\"")
    )
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    PathParams((user_id, product_id)): PathParams<(i64, i64)>,
) -> AppResult<Ack> {
    state.cart_service.add_to_cart(user_id, product_id).await?;
    Ok(Ack)
}

/// Get a user's full cart
#[utoipa::path(
    get,
    path = "/carrinho/{id_usuario}/",
    tag = "Carts",
    params(("id_usuario" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Cart found", body = Cart),
        (status = 404, description = "No cart, body is \"FALHA\"")
    )
)]
pub async fn get_cart(
    State(state): State<AppState>,
    PathParams(user_id): PathParams<i64>,
) -> AppResult<Json<Cart>> {
    let cart = state.cart_service.get_cart(user_id).await?;
    Ok(Json(cart))
}

/// Get item count and total of a user's cart
#[utoipa::path(
    get,
    path = "/carrinho/{id_usuario}/resumo/",
    tag = "Carts",
    params(("id_usuario" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Stored item count and recomputed total", body = CartSummary),
        (status = 404, description = "No cart, body is \"FALHA\"")
    )
)]
pub async fn get_summary(
    State(state): State<AppState>,
    PathParams(user_id): PathParams<i64>,
) -> AppResult<Json<CartSummary>> {
    let summary = state.cart_service.get_summary(user_id).await?;
    Ok(Json(summary))
}

/// Delete a user's cart
#[utoipa::path(
    delete,
    path = "/carrinho/{id_usuario}/",
    tag = "Carts",
    params(("id_usuario" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Cart deleted, body is \"OK\"", body = String),
        (status = 404, description = "No cart, body is \"FALHA\"")
    )
)]
pub async fn delete_cart(
    State(state): State<AppState>,
    PathParams(user_id): PathParams<i64>,
) -> AppResult<Ack> {
    state.cart_service.delete_cart(user_id).await?;
    Ok(Ack)
}
