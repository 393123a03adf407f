//! `PostgreSQL` implementation of the `RecordStore` trait.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;

use eventflow_core::document::Document;
use eventflow_core::error::DomainError;
use eventflow_core::store::RecordStore;

use crate::schema;

/// PostgreSQL-backed record store. Documents land in a single JSONB column;
/// no schema is imposed on their contents.
#[derive(Debug, Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    /// Creates a new `PgRecordStore` over an existing pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the records table if it does not exist yet. Called once at
    /// startup, before the store is handed to the service.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Store` if the DDL cannot be executed.
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        sqlx::query(schema::CREATE_RECORDS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(())
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn insert(&self, doc: Document) -> Result<(), DomainError> {
        sqlx::query("INSERT INTO records (document) VALUES ($1)")
            .bind(Value::Object(doc))
            .execute(&self.pool)
            .await
            .map_err(store_error)?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Document>, DomainError> {
        let values: Vec<Value> =
            sqlx::query_scalar("SELECT document FROM records ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(store_error)?;

        // The ingestion path only ever writes objects, so non-object rows
        // can only come from out-of-band writes; they are skipped.
        Ok(values
            .into_iter()
            .filter_map(|value| match value {
                Value::Object(map) => Some(map),
                _ => None,
            })
            .collect())
    }
}

fn store_error(err: sqlx::Error) -> DomainError {
    tracing::error!(error = %err, "record store operation failed");
    DomainError::Store(err.to_string())
}
