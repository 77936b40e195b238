//! Roll log entity and persistence abstraction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A persisted record of one roll request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollLog {
    /// Number of dice rolled in this request.
    pub count: u32,
    /// Ordered sequence of die faces, each in `[1, 6]`, one per die.
    pub results: Vec<u8>,
    /// Server time when the roll was recorded.
    pub rolled_at: DateTime<Utc>,
}

impl RollLog {
    /// Creates a log entry from the drawn results. `count` is derived from
    /// the results length, so `results.len() == count` holds by construction.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(results: Vec<u8>, rolled_at: DateTime<Utc>) -> Self {
        Self {
            count: results.len() as u32,
            results,
            rolled_at,
        }
    }
}

/// Repository trait for appending and listing roll log records.
///
/// The store exclusively owns the persisted collection; callers only
/// append or read. Records are never mutated or deleted here.
#[async_trait]
pub trait RollLogStore: Send + Sync {
    /// Durably records one entry.
    async fn append(&self, log: &RollLog) -> Result<(), DomainError>;

    /// Returns every record ever appended, in the store's natural order.
    async fn list_all(&self) -> Result<Vec<RollLog>, DomainError>;
}
