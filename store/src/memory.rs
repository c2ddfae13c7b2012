//! In-memory session store for tests.

use crate::{SessionRecord, SessionStore, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// HashMap-backed store keyed by `verifyUuid`. Lookups can be forced to fail
/// to exercise backend-error paths.
#[derive(Default)]
pub struct MemorySessionStore {
    records: RwLock<HashMap<String, SessionRecord>>,
    fail_with: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a record under its own `verifyUuid`.
    pub fn insert(&self, record: SessionRecord) {
        self.records
            .write()
            .expect("memory store lock poisoned")
            .insert(record.verify_uuid.clone(), record);
    }

    /// Make every subsequent lookup fail with a backend error.
    pub fn fail_lookups(&self, reason: impl Into<String>) {
        *self.fail_with.write().expect("memory store lock poisoned") = Some(reason.into());
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<SessionRecord>, StoreError> {
        if let Some(reason) = self.fail_with.read().expect("memory store lock poisoned").clone() {
            return Err(StoreError::Backend(reason));
        }
        Ok(self
            .records
            .read()
            .expect("memory store lock poisoned")
            .get(uuid)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lookup_misses_return_none() {
        let store = MemorySessionStore::new();
        assert!(store.find_by_uuid("absent").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn lookup_finds_inserted_record() {
        let store = MemorySessionStore::new();
        store.insert(SessionRecord::pending("u1", "d1", "nomad", "0xabc", "g1"));
        let record = store.find_by_uuid("u1").await.unwrap().unwrap();
        assert_eq!(record.user_id.as_deref(), Some("d1"));
    }

    #[tokio::test]
    async fn forced_failure_surfaces_backend_error() {
        let store = MemorySessionStore::new();
        store.fail_lookups("connection reset");
        assert!(matches!(
            store.find_by_uuid("u1").await,
            Err(StoreError::Backend(_))
        ));
    }
}
