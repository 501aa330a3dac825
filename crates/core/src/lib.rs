//! `jobboard-core` — domain model for job postings.
//!
//! This crate contains **pure domain** logic (no IO, no HTTP, no storage):
//! the canonical [`JobRecord`] entity, full-candidate validation, and the
//! sparse-patch merge used by partial updates.

pub mod error;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod id;
pub mod job;
pub mod patch;
pub mod validate;

pub use error::{DomainError, DomainResult};
pub use id::ExternalId;
pub use job::{
    Approach, AssignmentType, Grade, JobDraft, JobRecord, Location, Profession, WorkLocation,
    WorkingPattern,
};
pub use patch::{merge_partial, JobPatch};
pub use validate::validate_full;
