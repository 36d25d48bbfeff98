// Mock Log Store - in-memory stand-in for a real log backend
//
// Records are generated once and never mutated afterwards, so the store
// can be shared across request handlers without any locking.

use chrono::{DateTime, Duration, Utc};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::{LogLevel, LogRecord, LogSource, RecordMetadata};

/// Number of records generated per store
pub const RECORD_COUNT: usize = 100;

/// Gap between consecutive records, newest first
pub const RECORD_INTERVAL_MINUTES: i64 = 5;

pub const MESSAGES: [&str; 10] = [
    "User login successful",
    "Database connection failed",
    "Payment processing error",
    "API rate limit exceeded",
    "Cache miss",
    "New user registered",
    "Email sent successfully",
    "Job processing started",
    "Job processing completed",
    "Invalid credentials",
];

#[derive(Debug, Clone)]
pub struct MockLogStore {
    records: Vec<LogRecord>,
}

impl MockLogStore {
    /// Generate a fresh store from an unseeded source.
    /// Contents differ between processes.
    pub fn generate() -> Self {
        Self::with_seed(rand::random())
    }

    /// Deterministic store for tests and reproducible fixtures
    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::with_rng(&mut rng, Utc::now())
    }

    pub fn with_rng(rng: &mut StdRng, now: DateTime<Utc>) -> Self {
        let records = (0..RECORD_COUNT)
            .map(|i| LogRecord {
                id: format!("log-{}", i),
                timestamp: now - Duration::minutes(RECORD_INTERVAL_MINUTES * i as i64),
                level: LogLevel::ALL[rng.random_range(0..LogLevel::ALL.len())],
                source: LogSource::ALL[rng.random_range(0..LogSource::ALL.len())],
                message: MESSAGES[rng.random_range(0..MESSAGES.len())].to_string(),
                metadata: RecordMetadata::with_request_id(format!(
                    "req-{}",
                    rng.random_range(1000..=9999)
                )),
            })
            .collect();

        Self { records }
    }

    /// Wrap a fixed record set, order is kept as given
    pub fn from_records(records: Vec<LogRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&LogRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Filter by an optional search term, then keep the first `limit` records.
    ///
    /// The term is matched case-insensitively against `message` and `source`
    /// only. An empty term behaves like no term. Generation order is preserved.
    pub fn query(&self, search_term: Option<&str>, limit: usize) -> Vec<LogRecord> {
        let needle = search_term
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase());

        let results: Vec<LogRecord> = match needle {
            Some(ref needle) => self
                .records
                .iter()
                .filter(|r| r.matches(needle))
                .take(limit)
                .cloned()
                .collect(),
            None => self.records.iter().take(limit).cloned().collect(),
        };

        debug!(term = ?needle, limit, matched = results.len(), "Store query");
        results
    }
}

impl Default for MockLogStore {
    fn default() -> Self {
        Self::generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_term_is_no_filter() {
        let store = MockLogStore::with_seed(7);
        assert_eq!(store.query(Some(""), 10), store.query(None, 10));
    }

    #[test]
    fn test_get_by_id() {
        let store = MockLogStore::with_seed(7);
        assert_eq!(store.get("log-42").map(|r| r.id.as_str()), Some("log-42"));
        assert!(store.get("log-100").is_none());
    }

    #[test]
    fn test_from_records_keeps_order() {
        let seeded = MockLogStore::with_seed(3);
        let reversed: Vec<LogRecord> = seeded.records().iter().rev().cloned().collect();
        let store = MockLogStore::from_records(reversed);
        assert_eq!(store.query(None, 1)[0].id, "log-99");
    }
}
