use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use models::contact::{Contact, NewContact};
use service::contact_service;

use crate::errors::ApiError;
use crate::routes::AppState;

pub async fn list_contacts(State(state): State<AppState>) -> Json<Vec<Contact>> {
    Json(contact_service::list_contacts(&state.contacts).await)
}

pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Contact>, ApiError> {
    contact_service::get_contact(&state.contacts, &id)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn create_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<NewContact>, JsonRejection>,
) -> Result<(StatusCode, Json<Contact>), ApiError> {
    let Json(payload) = payload.map_err(|r| ApiError::from_json_rejection(r, &headers))?;
    let created = contact_service::create_contact(&state.contacts, payload).await;
    Ok((StatusCode::CREATED, Json(created)))
}
