use models::contact::{self, Contact, NewContact};
use tracing::debug;

use crate::storage::MemoryMapStore;

/// Thread-safe in-memory log of contact records, keyed by sequence id.
pub type ContactStore = MemoryMapStore<Contact>;

/// Create a new contact, stamping the contact time server-side. The record
/// is keyed by a generated sequence id, not by the timestamp, so two creates
/// within the same clock tick cannot collide.
pub async fn create_contact(store: &ContactStore, payload: NewContact) -> Contact {
    let created = store
        .create_with_id(|id| contact::from_payload(id, payload))
        .await;
    debug!(id = %created.id, "created contact");
    created
}

/// Get a contact by id.
pub async fn get_contact(store: &ContactStore, id: &str) -> Option<Contact> {
    store.get(id).await
}

/// List all contacts.
pub async fn list_contacts(store: &ContactStore) -> Vec<Contact> {
    store.list().await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> NewContact {
        NewContact { user_id_one: "1".into(), user_id_two: "2".into() }
    }

    #[tokio::test]
    async fn rapid_creates_yield_distinct_records() {
        let store = ContactStore::new();

        // Back-to-back creates land in the same clock tick on coarse clocks;
        // sequence keying must keep both.
        let a = create_contact(&store, pair()).await;
        let b = create_contact(&store, pair()).await;

        assert_ne!(a.id, b.id);
        assert_eq!(list_contacts(&store).await.len(), 2);
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let store = ContactStore::new();
        let created = create_contact(&store, pair()).await;

        assert!(!created.time_of_contact.is_empty());
        let found = get_contact(&store, &created.id).await.expect("stored contact");
        assert_eq!(found, created);
        assert_eq!(found.user_id_one, "1");
        assert_eq!(found.user_id_two, "2");
    }

    #[tokio::test]
    async fn referenced_users_are_not_validated() {
        // The stores are independent; a contact may reference ids that no
        // user store has ever issued.
        let store = ContactStore::new();
        let c = create_contact(
            &store,
            NewContact { user_id_one: "no-such".into(), user_id_two: "user".into() },
        )
        .await;
        assert_eq!(get_contact(&store, &c.id).await, Some(c));
    }
}
