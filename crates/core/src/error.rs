//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Infrastructure
/// concerns (connection errors, pool exhaustion) belong to the store layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// One or more fields failed validation. Field names use their wire
    /// (camelCase) spelling so they can be reported to callers directly.
    #[error("validation failed for fields: {}", fields.join(", "))]
    Validation { fields: Vec<String> },

    /// The caller attempted to change the external identifier, or supplied a
    /// body identifier that disagrees with the path identifier.
    #[error("external id is immutable: expected '{expected}', got '{found}'")]
    IdentifierMismatch { expected: String, found: String },

    /// A record with the same external identifier already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// No record exists for the given external identifier.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Validation {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn identifier_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::IdentifierMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
