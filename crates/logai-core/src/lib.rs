//! Core types for the log analytics mock backend
//! this crate holds the log record model and the in-memory mock store.
pub mod store;

pub use store::MockLogStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// LOG LEVEL //

/// Log severity levels emitted by the mock generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
    Debug,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [Self::Info, Self::Warning, Self::Error, Self::Debug];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// LOG SOURCE //

/// Upstream system a record claims to come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSource {
    Aws,
    Datadog,
    Sentry,
}

impl LogSource {
    pub const ALL: [LogSource; 3] = [Self::Aws, Self::Datadog, Self::Sentry];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aws => "aws",
            Self::Datadog => "datadog",
            Self::Sentry => "sentry",
        }
    }
}

impl fmt::Display for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// LOG RECORD //

/// Extra data attached to a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordMetadata {
    pub request_id: String, // "req-NNNN"

    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>, // anything beyond the request id
}

impl RecordMetadata {
    pub fn with_request_id(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            fields: HashMap::new(),
        }
    }
}

/// A single synthetic log entry, immutable once the store is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub id: String, // "log-<index>"

    pub timestamp: DateTime<Utc>,

    pub level: LogLevel,

    pub source: LogSource,

    pub message: String,

    pub metadata: RecordMetadata,
}

impl LogRecord {
    /// Case-insensitive substring match on message or source.
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.message.to_lowercase().contains(needle) || self.source.as_str().contains(needle)
    }
}
