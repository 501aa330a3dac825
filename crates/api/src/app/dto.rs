use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use jobboard_core::JobRecord;

// Full records serialize straight from `JobRecord` (already camelCase on the
// wire); only the listing needs its own shape.

/// Listing entry: enough to render a search result, no body text.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSummary {
    pub id: Uuid,
    pub external_id: String,
    pub title: String,
    pub organisation: String,
    pub version: u32,
    pub date_closing: DateTime<Utc>,
}

impl From<&JobRecord> for JobSummary {
    fn from(record: &JobRecord) -> Self {
        Self {
            id: record.id,
            external_id: record.external_id.to_string(),
            title: record.title.clone(),
            organisation: record.organisation.clone(),
            version: record.version,
            date_closing: record.date_closing,
        }
    }
}
