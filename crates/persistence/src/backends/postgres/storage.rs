//! ProduceStorage implementation for PostgreSQL.

use async_trait::async_trait;
use tokio_postgres::Row;

use crate::core::ProduceStorage;
use crate::core::storage::require_name;
use crate::error::{BackendError, ResourceError, StorageError, StorageResult};
use crate::types::{ProduceKind, StoredProduce};

use super::PostgresBackend;

fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "postgres".to_string(),
        message,
        source: None,
    })
}

fn row_to_produce(row: &Row) -> StoredProduce {
    StoredProduce::new(row.get::<_, i64>(0), row.get::<_, String>(1))
}

impl PostgresBackend {
    fn not_found(&self, id: i64) -> StorageError {
        StorageError::Resource(ResourceError::NotFound {
            kind: self.produce_kind(),
            id: id.to_string(),
        })
    }
}

#[async_trait]
impl ProduceStorage for PostgresBackend {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    fn kind(&self) -> ProduceKind {
        self.produce_kind()
    }

    async fn list(&self) -> StorageResult<Vec<StoredProduce>> {
        let client = self.get_client().await?;
        let rows = client
            .query(
                &format!("SELECT id, name FROM {} ORDER BY id", self.table()),
                &[],
            )
            .await
            .map_err(|e| internal_error(format!("Failed to list items: {}", e)))?;

        Ok(rows.iter().map(row_to_produce).collect())
    }

    async fn get(&self, id: i64) -> StorageResult<Option<StoredProduce>> {
        let client = self.get_client().await?;
        let row = client
            .query_opt(
                &format!("SELECT id, name FROM {} WHERE id = $1", self.table()),
                &[&id],
            )
            .await
            .map_err(|e| internal_error(format!("Failed to read item: {}", e)))?;

        Ok(row.as_ref().map(row_to_produce))
    }

    async fn insert(&self, name: &str) -> StorageResult<StoredProduce> {
        require_name(self.produce_kind(), name)?;
        let client = self.get_client().await?;

        let row = client
            .query_one(
                &format!(
                    "INSERT INTO {} (name) VALUES ($1) RETURNING id, name",
                    self.table()
                ),
                &[&name],
            )
            .await
            .map_err(|e| internal_error(format!("Failed to insert item: {}", e)))?;

        let created = row_to_produce(&row);
        tracing::debug!(kind = %self.produce_kind(), id = created.id, "Inserted item");
        Ok(created)
    }

    async fn update(&self, id: i64, name: &str) -> StorageResult<StoredProduce> {
        require_name(self.produce_kind(), name)?;
        let client = self.get_client().await?;

        let row = client
            .query_opt(
                &format!(
                    "UPDATE {} SET name = $1 WHERE id = $2 RETURNING id, name",
                    self.table()
                ),
                &[&name, &id],
            )
            .await
            .map_err(|e| internal_error(format!("Failed to update item: {}", e)))?;

        row.as_ref()
            .map(row_to_produce)
            .ok_or_else(|| self.not_found(id))
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let client = self.get_client().await?;

        let affected = client
            .execute(
                &format!("DELETE FROM {} WHERE id = $1", self.table()),
                &[&id],
            )
            .await
            .map_err(|e| internal_error(format!("Failed to delete item: {}", e)))?;

        if affected == 0 {
            return Err(self.not_found(id));
        }

        tracing::debug!(kind = %self.produce_kind(), id, "Deleted item");
        Ok(())
    }

    async fn count(&self) -> StorageResult<u64> {
        let client = self.get_client().await?;
        let row = client
            .query_one(&format!("SELECT COUNT(*) FROM {}", self.table()), &[])
            .await
            .map_err(|e| internal_error(format!("Failed to count items: {}", e)))?;
        let count: i64 = row.get(0);
        Ok(count as u64)
    }

    async fn health_check(&self) -> StorageResult<()> {
        let client = self.get_client().await.map_err(|_| {
            StorageError::Backend(BackendError::Unavailable {
                backend_name: "postgres".to_string(),
                message: "Failed to get connection".to_string(),
            })
        })?;
        client
            .execute("SELECT 1", &[])
            .await
            .map_err(|e| internal_error(format!("Health check failed: {}", e)))?;
        Ok(())
    }
}
