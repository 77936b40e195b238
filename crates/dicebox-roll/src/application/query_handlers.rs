//! Query handlers for the roll handler context.
//!
//! Read-only access to the roll log, returned as view DTOs.

use chrono::{DateTime, Utc};
use dicebox_core::error::DomainError;
use dicebox_core::store::RollLogStore;
use serde::Serialize;

/// Read-only view of one persisted roll.
#[derive(Debug, Serialize)]
pub struct RollLogView {
    /// Number of dice rolled.
    pub count: u32,
    /// Die faces in draw order.
    pub results: Vec<u8>,
    /// When the roll was recorded.
    pub rolled_at: DateTime<Utc>,
}

/// Retrieves every persisted roll, in the store's natural order.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the store read fails.
pub async fn list_roll_logs(store: &dyn RollLogStore) -> Result<Vec<RollLogView>, DomainError> {
    let logs = store.list_all().await?;

    Ok(logs
        .into_iter()
        .map(|log| RollLogView {
            count: log.count,
            results: log.results,
            rolled_at: log.rolled_at,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use dicebox_core::store::{RollLog, RollLogStore};
    use dicebox_test_support::{FailingRollLogStore, RecordingRollLogStore};

    use super::list_roll_logs;

    fn fixed_now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_empty_store_yields_empty_list() {
        let store = RecordingRollLogStore::new();

        let views = list_roll_logs(&store).await.unwrap();

        assert!(views.is_empty());
    }

    #[tokio::test]
    async fn test_views_preserve_store_order_and_fields() {
        let store = RecordingRollLogStore::new();
        store
            .append(&RollLog::new(vec![5], fixed_now()))
            .await
            .unwrap();
        store
            .append(&RollLog::new(vec![1, 2, 3], fixed_now()))
            .await
            .unwrap();

        let views = list_roll_logs(&store).await.unwrap();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].count, 1);
        assert_eq!(views[0].results, vec![5]);
        assert_eq!(views[1].count, 3);
        assert_eq!(views[1].results, vec![1, 2, 3]);
        assert_eq!(views[1].rolled_at, fixed_now());
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let store = FailingRollLogStore;

        let result = list_roll_logs(&store).await;

        assert!(result.is_err());
    }
}
