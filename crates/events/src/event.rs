//! Wire shape of a change notification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jobboard_core::JobRecord;

/// Which mutation produced the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Create,
    Replace,
    Update,
}

/// Static event metadata shared by every message a process emits.
#[derive(Debug, Clone)]
pub struct EventMetadata {
    /// Schema version of the message payload, not of any particular record.
    pub message_version: u32,
    /// Base URL consumers can use to fetch the record; optional.
    pub api_endpoint: Option<String>,
}

impl Default for EventMetadata {
    fn default() -> Self {
        Self {
            message_version: 1,
            api_endpoint: None,
        }
    }
}

/// A change notification, serialized as camelCase JSON on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobEvent {
    pub id: Uuid,
    pub external_id: String,
    /// Message schema version (from [`EventMetadata`], defaults to 1).
    pub version: u32,
    pub operation: Operation,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,
}

impl JobEvent {
    pub fn new(record: &JobRecord, operation: Operation, metadata: &EventMetadata) -> Self {
        let api_endpoint = metadata
            .api_endpoint
            .as_deref()
            .map(|base| format!("{}/jobs/{}", base.trim_end_matches('/'), record.external_id));

        Self {
            id: record.id,
            external_id: record.external_id.as_str().to_string(),
            version: metadata.message_version,
            operation,
            timestamp: Utc::now(),
            api_endpoint,
        }
    }
}
