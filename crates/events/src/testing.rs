//! Publisher test doubles.
//!
//! Kept in the library (not behind `cfg(test)`) so downstream crates can use
//! them in their own integration tests and local development wiring.

use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::event::JobEvent;
use crate::publisher::EventPublisher;

/// Records every published event for later inspection.
#[derive(Debug, Default)]
pub struct RecordingEventPublisher {
    published: Mutex<Vec<JobEvent>>,
}

impl RecordingEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Vec<JobEvent> {
        self.published
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.published
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl EventPublisher for RecordingEventPublisher {
    async fn publish(&self, event: &JobEvent) -> Result<()> {
        self.published
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event.clone());
        Ok(())
    }
}

/// Always fails, for asserting that publish failures never fail the request.
#[derive(Debug, Default)]
pub struct FailingEventPublisher;

#[async_trait]
impl EventPublisher for FailingEventPublisher {
    async fn publish(&self, _event: &JobEvent) -> Result<()> {
        Err(anyhow!("simulated publish failure"))
    }
}
