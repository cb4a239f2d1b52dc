use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

/// Generic in-memory keyed record store.
///
/// Holds a `HashMap<String, V>` together with its id counter behind a single
/// lock, so the counter can never be read twice with the same value by
/// concurrent creates. The raw map is never exposed; callers only get cloned
/// values, which keeps every mutation behind the lock.
pub struct MemoryMapStore<V> {
    inner: RwLock<Inner<V>>,
}

struct Inner<V> {
    next_id: u64,
    records: HashMap<String, V>,
}

impl<V: Clone> MemoryMapStore<V> {
    /// Empty store; ids start at 1.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: RwLock::new(Inner { next_id: 1, records: HashMap::new() }),
        })
    }

    /// Snapshot all records into a fresh `Vec`. Order is unspecified.
    pub async fn list(&self) -> Vec<V> {
        let inner = self.inner.read().await;
        inner.records.values().cloned().collect()
    }

    /// Look up a record by exact key. `None` is the not-found signal.
    pub async fn get(&self, id: &str) -> Option<V> {
        let inner = self.inner.read().await;
        inner.records.get(id).cloned()
    }

    /// Assign the next id and insert the record built from it, all under one
    /// write guard. Returns a clone of the stored record.
    pub async fn create_with_id<F>(&self, build: F) -> V
    where
        F: FnOnce(String) -> V,
    {
        let mut inner = self.inner.write().await;
        let id = inner.next_id.to_string();
        inner.next_id += 1;
        let record = build(id.clone());
        inner.records.insert(id, record.clone());
        record
    }

    /// Current number of records.
    pub async fn len(&self) -> usize {
        let inner = self.inner.read().await;
        inner.records.len()
    }
}
