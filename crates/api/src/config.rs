//! Environment-driven configuration.
//!
//! Only the binary reads the environment; the library layers take explicit
//! values so tests can wire in-memory doubles without touching env vars.

/// Process configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    /// When set, records persist to Postgres; otherwise in-memory.
    pub database_url: Option<String>,
    /// When set, notifications go to NATS; otherwise they are dropped.
    pub nats_url: Option<String>,
    pub queue_subject: String,
    /// Schema version stamped on every outbound message.
    pub message_version: u32,
    /// Base URL embedded in events so consumers can fetch the record.
    pub api_endpoint: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("BIND_ADDR", "0.0.0.0:8080"),
            database_url: non_empty(std::env::var("DATABASE_URL").ok()),
            nats_url: non_empty(std::env::var("NATS_URL").ok()),
            queue_subject: env_or("QUEUE_SUBJECT", "jobs.events"),
            message_version: message_version_from_env(),
            api_endpoint: non_empty(std::env::var("QUEUE_API_ENDPOINT").ok()),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// A non-numeric `QUEUE_MESSAGE_VERSION` falls back to 1 rather than
/// refusing to start.
fn message_version_from_env() -> u32 {
    std::env::var("QUEUE_MESSAGE_VERSION")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1)
}
