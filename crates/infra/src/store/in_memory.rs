//! In-memory store for tests and local development.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use jobboard_core::{ExternalId, JobRecord};

use super::{JobStore, StoreError};

/// RwLock-backed map keyed by external id.
///
/// Intended for tests/dev. Lock poisoning is treated as recoverable (the map
/// itself cannot be left half-written by any of the operations below).
#[derive(Debug, Default)]
pub struct InMemoryJobStore {
    records: RwLock<HashMap<ExternalId, JobRecord>>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn get(&self, external_id: &ExternalId) -> Result<Option<JobRecord>, StoreError> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        Ok(records.get(external_id).cloned())
    }

    async fn insert_if_absent(&self, record: JobRecord) -> Result<JobRecord, StoreError> {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        if records.contains_key(&record.external_id) {
            return Err(StoreError::Conflict(record.external_id.to_string()));
        }
        records.insert(record.external_id.clone(), record.clone());
        Ok(record)
    }

    async fn put(&self, record: JobRecord) -> Result<JobRecord, StoreError> {
        let mut records = self.records.write().unwrap_or_else(|e| e.into_inner());
        if !records.contains_key(&record.external_id) {
            return Err(StoreError::NotFound(record.external_id.to_string()));
        }
        records.insert(record.external_id.clone(), record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<JobRecord>, StoreError> {
        let records = self.records.read().unwrap_or_else(|e| e.into_inner());
        let mut all: Vec<JobRecord> = records.values().cloned().collect();
        all.sort_by(|a, b| a.external_id.as_str().cmp(b.external_id.as_str()));
        Ok(all)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::validate_full;

    fn record(external_id: &str) -> JobRecord {
        validate_full(crate::testutil::draft(external_id)).unwrap()
    }

    #[tokio::test]
    async fn insert_then_get_roundtrips() {
        let store = InMemoryJobStore::new();
        let stored = store.insert_if_absent(record("ext-1")).await.unwrap();

        let fetched = store.get(&ExternalId::new("ext-1")).await.unwrap();
        assert_eq!(fetched, Some(stored));
    }

    #[tokio::test]
    async fn duplicate_insert_conflicts_and_preserves_original() {
        let store = InMemoryJobStore::new();
        let first = store.insert_if_absent(record("ext-1")).await.unwrap();

        let err = store.insert_if_absent(record("ext-1")).await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(id) if id == "ext-1"));

        let fetched = store.get(&ExternalId::new("ext-1")).await.unwrap();
        assert_eq!(fetched, Some(first));
    }

    #[tokio::test]
    async fn put_never_creates() {
        let store = InMemoryJobStore::new();
        let err = store.put(record("ext-1")).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(store.get(&ExternalId::new("ext-1")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn list_is_ordered_by_external_id() {
        let store = InMemoryJobStore::new();
        store.insert_if_absent(record("ext-2")).await.unwrap();
        store.insert_if_absent(record("ext-1")).await.unwrap();

        let ids: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.external_id.to_string())
            .collect();
        assert_eq!(ids, vec!["ext-1", "ext-2"]);
    }
}
