//! Mutation orchestrator: validate → persist → notify.

use std::sync::Arc;

use thiserror::Error;

use jobboard_core::{
    merge_partial, validate_full, DomainError, ExternalId, JobDraft, JobPatch, JobRecord,
};
use jobboard_events::{EventMetadata, EventPublisher, JobEvent, Operation};

use crate::store::{JobStore, StoreError};

/// Application-level failure of a mutation or read.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation failed for fields: {}", fields.join(", "))]
    Validation { fields: Vec<String> },

    #[error("external id mismatch: expected '{expected}', got '{found}'")]
    IdentifierMismatch { expected: String, found: String },

    #[error("duplicate external id '{0}'")]
    Conflict(String),

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Store(StoreError),
}

impl From<DomainError> for ServiceError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation { fields } => ServiceError::Validation { fields },
            DomainError::IdentifierMismatch { expected, found } => {
                ServiceError::IdentifierMismatch { expected, found }
            }
            DomainError::Conflict(id) => ServiceError::Conflict(id),
            DomainError::NotFound => ServiceError::NotFound,
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Conflict(id) => ServiceError::Conflict(id),
            StoreError::NotFound(_) => ServiceError::NotFound,
            other => ServiceError::Store(other),
        }
    }
}

/// Sequences the three mutation operations over an injected store and
/// publisher.
///
/// Ordering guarantee: the store commit happens-before the publish attempt,
/// and a publish failure is absorbed at the notify boundary — a caller seeing
/// success holds a durable write whether or not the notification went out.
/// There is no retry or dead-letter path; delivery is at-most-once-attempt.
///
/// No cross-request state lives here: each call is a self-contained
/// validate → persist → notify sequence, and concurrent writers for the same
/// key are arbitrated by the store (last-write-wins for overwrites).
#[derive(Clone)]
pub struct JobService {
    store: Arc<dyn JobStore>,
    publisher: Arc<dyn EventPublisher>,
    metadata: EventMetadata,
}

impl JobService {
    pub fn new(
        store: Arc<dyn JobStore>,
        publisher: Arc<dyn EventPublisher>,
        metadata: EventMetadata,
    ) -> Self {
        Self {
            store,
            publisher,
            metadata,
        }
    }

    /// Create a new record. Conflict if the external id is taken.
    pub async fn create(&self, draft: JobDraft) -> Result<JobRecord, ServiceError> {
        let candidate = validate_full(draft)?;
        let stored = self.store.insert_if_absent(candidate).await?;
        tracing::info!(external_id = %stored.external_id, "job created");
        self.notify(&stored, Operation::Create).await;
        Ok(stored)
    }

    /// Wholesale-replace the record at `path_id`. Never creates.
    ///
    /// A body identifier disagreeing with the path is a client error distinct
    /// from validation failure and is rejected before any other check; an
    /// absent body identifier is allowed and fixed to the path.
    pub async fn replace(
        &self,
        path_id: &ExternalId,
        mut draft: JobDraft,
    ) -> Result<JobRecord, ServiceError> {
        let body_id = ExternalId::new(draft.external_id.as_str());
        if !body_id.as_str().is_empty() && body_id != *path_id {
            return Err(ServiceError::IdentifierMismatch {
                expected: path_id.to_string(),
                found: body_id.to_string(),
            });
        }
        draft.external_id = path_id.as_str().to_string();

        let candidate = validate_full(draft)?;
        let existing = self
            .store
            .get(path_id)
            .await?
            .ok_or(ServiceError::NotFound)?;

        let record = JobRecord {
            id: existing.id,
            version: existing.version + 1,
            ..candidate
        };
        let stored = self.store.put(record).await?;
        tracing::info!(external_id = %stored.external_id, version = stored.version, "job replaced");
        self.notify(&stored, Operation::Replace).await;
        Ok(stored)
    }

    /// Merge a sparse patch into the record at `path_id`. Never creates.
    pub async fn partial_update(
        &self,
        path_id: &ExternalId,
        patch: JobPatch,
    ) -> Result<JobRecord, ServiceError> {
        // Identifier guard before touching the store.
        if let Some(found) = patch.external_id_conflicts_with(path_id) {
            return Err(ServiceError::IdentifierMismatch {
                expected: path_id.to_string(),
                found,
            });
        }

        let existing = self
            .store
            .get(path_id)
            .await?
            .ok_or(ServiceError::NotFound)?;

        let mut merged = merge_partial(&existing, patch)?;
        merged.version = existing.version + 1;

        let stored = self.store.put(merged).await?;
        tracing::info!(external_id = %stored.external_id, version = stored.version, "job updated");
        self.notify(&stored, Operation::Update).await;
        Ok(stored)
    }

    /// Pass-through read by external id.
    pub async fn fetch(&self, external_id: &ExternalId) -> Result<JobRecord, ServiceError> {
        self.store
            .get(external_id)
            .await?
            .ok_or(ServiceError::NotFound)
    }

    /// Pass-through listing.
    pub async fn list(&self) -> Result<Vec<JobRecord>, ServiceError> {
        Ok(self.store.list().await?)
    }

    /// Notify boundary: the write already committed, so a publish failure is
    /// logged and dropped, never propagated.
    async fn notify(&self, record: &JobRecord, operation: Operation) {
        let event = JobEvent::new(record, operation, &self.metadata);
        if let Err(err) = self.publisher.publish(&event).await {
            tracing::warn!(
                external_id = %record.external_id,
                operation = ?operation,
                error = %err,
                "notification publish failed; record write is already durable"
            );
        }
    }
}
