//! Durable keyed storage for job records.

use async_trait::async_trait;
use thiserror::Error;

use jobboard_core::{ExternalId, JobRecord};

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryJobStore;
pub use postgres::PostgresJobStore;

/// Store-level failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A record with this external id already exists (Create only).
    #[error("duplicate external id '{0}'")]
    Conflict(String),

    /// No record exists for this external id (overwrite paths only).
    #[error("no record for external id '{0}'")]
    NotFound(String),

    /// Backend failure (connection, pool, serialization at the boundary).
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Keyed storage for [`JobRecord`]s; owns uniqueness of the external id.
///
/// The store provides per-key atomicity for a single insert/overwrite: of two
/// concurrent `insert_if_absent` calls for the same key, at most one
/// succeeds. Callers never cache or mirror records — every operation reads
/// and writes through here.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn get(&self, external_id: &ExternalId) -> Result<Option<JobRecord>, StoreError>;

    /// Insert keyed by `external_id`; `Conflict` if the key exists.
    async fn insert_if_absent(&self, record: JobRecord) -> Result<JobRecord, StoreError>;

    /// Overwrite the record at its external id; `NotFound` if absent.
    /// Never creates.
    async fn put(&self, record: JobRecord) -> Result<JobRecord, StoreError>;

    /// All records, ordered by external id for deterministic listings.
    async fn list(&self) -> Result<Vec<JobRecord>, StoreError>;
}
