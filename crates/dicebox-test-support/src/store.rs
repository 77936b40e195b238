//! Test stores — mock `RollLogStore` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use dicebox_core::error::DomainError;
use dicebox_core::store::{RollLog, RollLogStore};

/// An in-memory roll log store that records every append and serves reads
/// from the recorded entries, in append order. Doubles as a working store
/// for integration tests that exercise a full roll-then-list flow.
#[derive(Debug, Default)]
pub struct RecordingRollLogStore {
    logs: Mutex<Vec<RollLog>>,
}

impl RecordingRollLogStore {
    /// Create an empty recording store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all entries that were appended.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn appended(&self) -> Vec<RollLog> {
        self.logs.lock().unwrap().clone()
    }
}

#[async_trait]
impl RollLogStore for RecordingRollLogStore {
    async fn append(&self, log: &RollLog) -> Result<(), DomainError> {
        self.logs
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("store mutex poisoned: {e}")))?
            .push(log.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<RollLog>, DomainError> {
        Ok(self
            .logs
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("store mutex poisoned: {e}")))?
            .clone())
    }
}

/// A roll log store that always returns an infrastructure error. Useful
/// for testing error-handling paths.
#[derive(Debug)]
pub struct FailingRollLogStore;

#[async_trait]
impl RollLogStore for FailingRollLogStore {
    async fn append(&self, _log: &RollLog) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn list_all(&self) -> Result<Vec<RollLog>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}
