//! `PostgreSQL` implementation of the `RollLogStore` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use dicebox_core::error::DomainError;
use dicebox_core::store::{RollLog, RollLogStore};

use crate::schema;

/// PostgreSQL-backed roll log store.
///
/// Rows are appended once and never updated; the natural listing order is
/// the ascending primary key, which is insertion order.
#[derive(Debug, Clone)]
pub struct PgRollLogStore {
    pool: PgPool,
}

impl PgRollLogStore {
    /// Creates a new `PgRollLogStore`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Applies the idempotent roll log DDL.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the DDL fails to execute.
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::raw_sql(schema::CREATE_ROLL_LOGS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Infrastructure(format!("schema setup failed: {e}")))?;

        tracing::debug!("roll log schema ensured");
        Ok(())
    }
}

fn results_to_json(results: &[u8]) -> serde_json::Value {
    serde_json::Value::Array(results.iter().map(|v| serde_json::Value::from(*v)).collect())
}

fn results_from_json(value: serde_json::Value) -> Result<Vec<u8>, DomainError> {
    serde_json::from_value(value)
        .map_err(|e| DomainError::Infrastructure(format!("corrupt results payload: {e}")))
}

fn row_to_roll_log(row: &PgRow) -> Result<RollLog, DomainError> {
    let count: i32 = row
        .try_get("dice_count")
        .map_err(|e| DomainError::Infrastructure(format!("row decode failed: {e}")))?;
    let results: serde_json::Value = row
        .try_get("results")
        .map_err(|e| DomainError::Infrastructure(format!("row decode failed: {e}")))?;
    let rolled_at: DateTime<Utc> = row
        .try_get("rolled_at")
        .map_err(|e| DomainError::Infrastructure(format!("row decode failed: {e}")))?;

    Ok(RollLog {
        count: u32::try_from(count)
            .map_err(|e| DomainError::Infrastructure(format!("negative dice count in row: {e}")))?,
        results: results_from_json(results)?,
        rolled_at,
    })
}

#[async_trait]
impl RollLogStore for PgRollLogStore {
    async fn append(&self, log: &RollLog) -> Result<(), DomainError> {
        let count = i32::try_from(log.count).map_err(|e| {
            DomainError::Infrastructure(format!("dice count does not fit storage column: {e}"))
        })?;

        sqlx::query("INSERT INTO roll_logs (dice_count, results, rolled_at) VALUES ($1, $2, $3)")
            .bind(count)
            .bind(results_to_json(&log.results))
            .bind(log.rolled_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Infrastructure(format!("roll log append failed: {e}")))?;

        tracing::debug!(count = log.count, "appended roll log entry");
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<RollLog>, DomainError> {
        let rows =
            sqlx::query("SELECT dice_count, results, rolled_at FROM roll_logs ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| DomainError::Infrastructure(format!("roll log read failed: {e}")))?;

        rows.iter().map(row_to_roll_log).collect()
    }
}
