//! User handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::extractors::{JsonBody, QueryParams};
use crate::api::AppState;
use crate::domain::{CreateUser, EmailEntry, UserResponse};
use crate::errors::AppResult;
use crate::types::Ack;

/// User lookup by id
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserIdQuery {
    /// User identifier
    pub id: i64,
}

/// User search by first name
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FirstNameQuery {
    /// Exact first name, case-sensitive
    pub nome: String,
}

/// Email listing by domain
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DomainQuery {
    /// Everything after the '@'
    pub dominio: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/usuario/",
            get(get_user).post(create_user).delete(delete_user),
        )
        .route("/usuario/nome", get(search_users))
        .route("/usuarios/emails/", get(emails_by_domain))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/usuario/",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 200, description = "User created, body is \"OK\"", body = String),
        (status = 400, description = "Invalid email or password, body is \"FALHA\""),
        (status = 409, description = "Id already taken, body is \"FALHA\"")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUser>,
) -> AppResult<Ack> {
    state.user_service.create_user(payload.into()).await?;
    Ok(Ack)
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/usuario/",
    tag = "Users",
    params(UserIdQuery),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found, body is \"FALHA\"")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<UserIdQuery>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_user(query.id).await?;
    Ok(Json(user.into()))
}

/// Delete a user with their cart and addresses
#[utoipa::path(
    delete,
    path = "/usuario/",
    tag = "Users",
    params(UserIdQuery),
    responses(
        (status = 200, description = "User deleted, body is \"OK\"", body = String),
        (status = 404, description = "User not found, body is \"FALHA\"")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<UserIdQuery>,
) -> AppResult<Ack> {
    state.user_service.delete_user(query.id).await?;
    Ok(Ack)
}

/// Find users by first name
#[utoipa::path(
    get,
    path = "/usuario/nome",
    tag = "Users",
    params(FirstNameQuery),
    responses(
        (status = 200, description = "Matching users in creation order", body = Vec<UserResponse>),
        (status = 404, description = "Nobody matches, body is \"FALHA\"")
    )
)]
pub async fn search_users(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<FirstNameQuery>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.search_by_first_name(&query.nome).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// List emails sharing a domain
#[utoipa::path(
    get,
    path = "/usuarios/emails/",
    tag = "Users",
    params(DomainQuery),
    responses(
        (status = 200, description = "Emails in the domain", body = Vec<EmailEntry>),
        (status = 404, description = "No email in the domain, body is \"FALHA\"")
    )
)]
pub async fn emails_by_domain(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<DomainQuery>,
) -> AppResult<Json<Vec<EmailEntry>>> {
    let emails = state.user_service.emails_by_domain(&query.dominio).await?;
    Ok(Json(emails))
}
