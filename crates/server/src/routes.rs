use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::{contact_service::ContactStore, user_service::UserStore};

use crate::errors::ApiError;

pub mod contacts;
pub mod users;

/// Shared handler state: the two stores are the only shared mutable state in
/// the whole process.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserStore>,
    pub contacts: Arc<ContactStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self { users: UserStore::new(), contacts: ContactStore::new() }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Unmatched paths, including malformed lookup paths like `/users/1/2`.
async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Build the full application router.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route(
            "/users",
            get(users::list_users)
                .post(users::create_user)
                .fallback(method_not_allowed),
        )
        .route(
            "/users/:id",
            get(users::get_user).fallback(method_not_allowed),
        )
        .route(
            "/contacts",
            get(contacts::list_contacts)
                .post(contacts::create_contact)
                .fallback(method_not_allowed),
        )
        .route(
            "/contacts/:id",
            get(contacts::get_contact).fallback(method_not_allowed),
        );

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .fallback(not_found)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
