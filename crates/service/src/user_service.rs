use models::user::{self, NewUser, User};
use tracing::debug;

use crate::storage::MemoryMapStore;

/// Thread-safe in-memory registry of user records.
pub type UserStore = MemoryMapStore<User>;

/// Create a new user, assigning a fresh unique id and creation timestamp.
/// Returns the stored record.
pub async fn create_user(store: &UserStore, payload: NewUser) -> User {
    let created = store
        .create_with_id(|id| user::from_payload(id, payload))
        .await;
    debug!(id = %created.id, "created user");
    created
}

/// Get a user by id.
pub async fn get_user(store: &UserStore, id: &str) -> Option<User> {
    store.get(id).await
}

/// List all users.
pub async fn list_users(store: &UserStore) -> Vec<User> {
    store.list().await
}
