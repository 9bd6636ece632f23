//! SQLite key-value store implementation.
//!
//! Implements `KvStore` from `aura-core` on the `local_storage` table using
//! the split read/write pools. Values are opaque strings.

use aura_core::storage::kv_store::KvStore;
use aura_types::error::RepositoryError;
use chrono::Utc;
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `KvStore`.
#[derive(Clone)]
pub struct SqliteKvStore {
    pool: DatabasePool,
}

impl SqliteKvStore {
    /// Create a new KV store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Number of stored keys.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM local_storage")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(query_error)?;
        row.try_get("n").map_err(query_error)
    }
}

fn query_error(e: sqlx::Error) -> RepositoryError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            tracing::warn!(error = %e, "local storage unavailable");
            RepositoryError::Connection
        }
        other => RepositoryError::Query(other.to_string()),
    }
}

impl KvStore for SqliteKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let row = sqlx::query("SELECT value FROM local_storage WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(query_error)?;

        row.map(|r| r.try_get::<String, _>("value"))
            .transpose()
            .map_err(query_error)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            "INSERT INTO local_storage (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .execute(&self.pool.writer)
        .await
        .map_err(query_error)?;

        tracing::debug!(key, "local storage entry written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM local_storage WHERE key = ?")
            .bind(key)
            .execute(&self.pool.writer)
            .await
            .map_err(query_error)?;

        tracing::debug!(key, "local storage entry removed");
        Ok(())
    }
}
