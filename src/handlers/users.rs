//! User resource handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::model::UserInput;
use crate::response::message;
use crate::service::UserService;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

/// Ids are `SERIAL`. Surrounding whitespace and a leading `+` are accepted, as the
/// store's integer input does; any other token cannot name a row.
fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str.trim().parse().map_err(|_| AppError::user_not_found())
}

fn parse_body(payload: Result<Json<Value>, JsonRejection>) -> Result<UserInput, AppError> {
    let Json(body) = payload?;
    UserInput::from_body(&body)
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::list(&state.pool).await?;
    Ok(Json(users))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let input = parse_body(payload)?;
    let user = UserService::create(&state.pool, &input).await?;
    tracing::info!(id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let user = UserService::read(&state.pool, id)
        .await?
        .ok_or_else(AppError::user_not_found)?;
    Ok(Json(user))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let input = parse_body(payload)?;
    let id = parse_id(&id_str)?;
    let user = UserService::update(&state.pool, id, &input)
        .await?
        .ok_or_else(AppError::user_not_found)?;
    Ok(Json(user))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if !UserService::delete(&state.pool, id).await? {
        return Err(AppError::user_not_found());
    }
    tracing::info!(id, "user deleted");
    Ok(Json(message("User deleted successfully")))
}
