//! `jobboard-events` — outbound change notifications.
//!
//! Every successful mutation emits a [`JobEvent`] through an
//! [`EventPublisher`]. Publication is best-effort with at-least-once-attempt
//! semantics: the database write is the source of truth and a publish failure
//! never rolls it back.

pub mod event;
pub mod publisher;
pub mod testing;

pub use event::{EventMetadata, JobEvent, Operation};
pub use publisher::{EventPublisher, NatsEventPublisher, NoopEventPublisher};
