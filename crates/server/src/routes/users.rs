use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use models::user::{NewUser, User};
use service::user_service;

use crate::errors::ApiError;
use crate::routes::AppState;

pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(user_service::list_users(&state.users).await)
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    user_service::get_user(&state.users, &id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn create_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(payload) = payload.map_err(|r| ApiError::from_json_rejection(r, &headers))?;
    let created = user_service::create_user(&state.users, payload).await;
    Ok((StatusCode::CREATED, Json(created)))
}
