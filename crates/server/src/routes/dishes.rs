use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use common::types::{Dish, MessageBody, NewDish};

use crate::errors::JsonApiError;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/dishes", tag = "dishes",
    responses(
        (status = 200, description = "All dishes, newest first", body = [crate::openapi::DishDoc]),
        (status = 500, description = "Store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Dish>>, JsonApiError> {
    let dishes = state.dishes.list().await?;
    info!(count = dishes.len(), "list dishes");
    Ok(Json(dishes))
}

#[utoipa::path(
    get, path = "/dishes/random", tag = "dishes",
    responses(
        (status = 200, description = "A uniformly random dish", body = crate::openapi::DishDoc),
        (status = 404, description = "No dishes stored", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn random(State(state): State<AppState>) -> Result<Json<Dish>, JsonApiError> {
    Ok(Json(state.dishes.random().await?))
}

#[utoipa::path(
    post, path = "/dishes", tag = "dishes",
    request_body = crate::openapi::NewDishDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::DishDoc),
        (status = 400, description = "Missing name or malformed body", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewDish>, JsonRejection>,
) -> Result<(StatusCode, Json<Dish>), JsonApiError> {
    let Json(input) = payload?;
    let dish = state.dishes.create(&input).await?;
    Ok((StatusCode::CREATED, Json(dish)))
}

#[utoipa::path(
    delete, path = "/dishes/{id}", tag = "dishes",
    params(("id" = String, Path, description = "Dish ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, JsonApiError> {
    state.dishes.delete(&id).await?;
    Ok(Json(MessageBody { message: "Dish deleted".into() }))
}
