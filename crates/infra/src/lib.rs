//! `jobboard-infra` — storage adapters and the mutation orchestrator.
//!
//! The [`store::JobStore`] trait is the only way the rest of the system
//! touches persisted records; [`service::JobService`] composes a store and a
//! publisher into the validate → persist → notify pipeline.

pub mod service;
pub mod store;
#[cfg(test)]
pub(crate) mod testutil;

pub use service::{JobService, ServiceError};
pub use store::{InMemoryJobStore, JobStore, PostgresJobStore, StoreError};
