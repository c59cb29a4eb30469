//! Address handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::{JsonBody, PathParams};
use crate::api::AppState;
use crate::domain::Address;
use crate::errors::{AppError, AppResult};
use crate::types::Ack;

/// Decoded segment names the address listing answers on
const LISTING_SEGMENTS: [&str; 2] = ["endereços", "enderecos"];

/// Create address routes.
///
/// The listing segment is matched after percent-decoding, so any casing of
/// the encoded `endereços` reaches the handler.
pub fn address_routes() -> Router<AppState> {
    Router::new()
        .route("/usuario/:id_usuario/:listing/", get(list_addresses))
        .route("/endereco/:id_usuario/", post(add_address))
}

/// List a user's addresses
#[utoipa::path(
    get,
    path = "/usuario/{id_usuario}/{listing}/",
    tag = "Addresses",
    params(
        ("id_usuario" = i64, Path, description = "User identifier"),
        ("listing" = String, Path, description = "`endereços` or `enderecos`")
    ),
    responses(
        (status = 200, description = "Addresses in insertion order", body = Vec<Address>),
        (status = 404, description = "Unknown listing or no address registered, body is \"FALHA\"")
    )
)]
pub async fn list_addresses(
    State(state): State<AppState>,
    PathParams((user_id, listing)): PathParams<(i64, String)>,
) -> AppResult<Json<Vec<Address>>> {
    if !LISTING_SEGMENTS.contains(&listing.as_str()) {
        return Err(AppError::not_found("Route"));
    }
    let addresses = state.user_service.list_addresses(user_id).await?;
    Ok(Json(addresses))
}

/// Register an address for a user
#[utoipa::path(
    post,
    path = "/endereco/{id_usuario}/",
    tag = "Addresses",
    params(("id_usuario" = i64, Path, description = "User identifier")),
    request_body = Address,
    responses(
        (status = 200, description = "Address added, body is \"OK\"", body = String),
        (status = 404, description = "User not found, body is \"FALHA\"")
    )
)]
pub async fn add_address(
    State(state): State<AppState>,
    PathParams(user_id): PathParams<i64>,
    JsonBody(address): JsonBody<Address>,
) -> AppResult<Ack> {
    state.user_service.add_address(user_id, address).await?;
    Ok(Ack)
}
