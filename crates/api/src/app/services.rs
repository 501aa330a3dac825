//! Composition root: picks the store and publisher implementations from
//! configuration and assembles the orchestrator. Swapping implementations is
//! a matter of injection; nothing below this point branches on environment.

use std::sync::Arc;

use anyhow::Result;

use jobboard_events::{EventMetadata, EventPublisher, NatsEventPublisher, NoopEventPublisher};
use jobboard_infra::{InMemoryJobStore, JobService, JobStore, PostgresJobStore};

use crate::config::Config;

pub async fn build_services(config: &Config) -> Result<JobService> {
    let store: Arc<dyn JobStore> = match &config.database_url {
        Some(url) => {
            tracing::info!("using postgres job store");
            Arc::new(PostgresJobStore::connect(url).await?)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; records will not survive restarts");
            Arc::new(InMemoryJobStore::new())
        }
    };

    let publisher: Arc<dyn EventPublisher> = match &config.nats_url {
        Some(url) => {
            tracing::info!(subject = %config.queue_subject, "publishing job events to nats");
            Arc::new(NatsEventPublisher::connect(url, config.queue_subject.clone()).await?)
        }
        None => {
            tracing::warn!("NATS_URL not set; job event notifications are disabled");
            Arc::new(NoopEventPublisher)
        }
    };

    let metadata = EventMetadata {
        message_version: config.message_version,
        api_endpoint: config.api_endpoint.clone(),
    };

    Ok(JobService::new(store, publisher, metadata))
}
