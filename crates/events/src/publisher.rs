//! Publisher contract and transport implementations.

use anyhow::Result;
use async_trait::async_trait;

use crate::event::JobEvent;

/// Outbound notification channel.
///
/// Failure is non-fatal to callers of the mutation pipeline: the orchestrator
/// catches it at the notify boundary and degrades to an unnotified success.
/// Implementations must be swappable via injection, not environment branches.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(&self, event: &JobEvent) -> Result<()>;
}

/// Publisher for deployments without a configured message channel.
#[derive(Debug, Default)]
pub struct NoopEventPublisher;

#[async_trait]
impl EventPublisher for NoopEventPublisher {
    async fn publish(&self, _event: &JobEvent) -> Result<()> {
        Ok(())
    }
}

/// NATS-backed publisher emitting JSON payloads to a fixed subject.
pub struct NatsEventPublisher {
    client: async_nats::Client,
    subject: String,
}

impl NatsEventPublisher {
    pub fn new(client: async_nats::Client, subject: impl Into<String>) -> Self {
        Self {
            client,
            subject: subject.into(),
        }
    }

    /// Connect to the given NATS server URL.
    pub async fn connect(url: &str, subject: impl Into<String>) -> Result<Self> {
        let client = async_nats::connect(url).await?;
        Ok(Self::new(client, subject))
    }
}

#[async_trait]
impl EventPublisher for NatsEventPublisher {
    async fn publish(&self, event: &JobEvent) -> Result<()> {
        let payload = serde_json::to_vec(event)?;
        self.client
            .publish(self.subject.clone(), payload.into())
            .await?;
        // Flush so a broken connection surfaces here, not on shutdown.
        self.client.flush().await?;
        tracing::debug!(subject = %self.subject, external_id = %event.external_id, "published job event");
        Ok(())
    }
}
