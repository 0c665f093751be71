//! ProduceStorage implementation for SQLite.

use async_trait::async_trait;
use rusqlite::{OptionalExtension, params};

use crate::core::ProduceStorage;
use crate::core::storage::require_name;
use crate::error::{BackendError, ResourceError, StorageError, StorageResult};
use crate::types::{ProduceKind, StoredProduce};

use super::SqliteBackend;

fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "sqlite".to_string(),
        message,
        source: None,
    })
}

fn row_to_produce(row: &rusqlite::Row<'_>) -> rusqlite::Result<StoredProduce> {
    Ok(StoredProduce::new(row.get(0)?, row.get::<_, String>(1)?))
}

impl SqliteBackend {
    fn not_found(&self, id: i64) -> StorageError {
        StorageError::Resource(ResourceError::NotFound {
            kind: self.produce_kind(),
            id: id.to_string(),
        })
    }
}

#[async_trait]
impl ProduceStorage for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    fn kind(&self) -> ProduceKind {
        self.produce_kind()
    }

    async fn list(&self) -> StorageResult<Vec<StoredProduce>> {
        let conn = self.get_connection()?;
        let mut stmt = conn
            .prepare(&format!("SELECT id, name FROM {} ORDER BY id", self.table()))
            .map_err(|e| internal_error(format!("Failed to prepare list query: {}", e)))?;

        let items = stmt
            .query_map([], row_to_produce)
            .map_err(|e| internal_error(format!("Failed to list items: {}", e)))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| internal_error(format!("Failed to read row: {}", e)))?;

        Ok(items)
    }

    async fn get(&self, id: i64) -> StorageResult<Option<StoredProduce>> {
        let conn = self.get_connection()?;
        conn.query_row(
            &format!("SELECT id, name FROM {} WHERE id = ?1", self.table()),
            params![id],
            row_to_produce,
        )
        .optional()
        .map_err(|e| internal_error(format!("Failed to read item: {}", e)))
    }

    async fn insert(&self, name: &str) -> StorageResult<StoredProduce> {
        require_name(self.produce_kind(), name)?;
        let conn = self.get_connection()?;

        let created = conn
            .query_row(
                &format!(
                    "INSERT INTO {} (name) VALUES (?1) RETURNING id, name",
                    self.table()
                ),
                params![name],
                row_to_produce,
            )
            .map_err(|e| internal_error(format!("Failed to insert item: {}", e)))?;

        tracing::debug!(kind = %self.produce_kind(), id = created.id, "Inserted item");
        Ok(created)
    }

    async fn update(&self, id: i64, name: &str) -> StorageResult<StoredProduce> {
        require_name(self.produce_kind(), name)?;
        let conn = self.get_connection()?;

        conn.query_row(
            &format!(
                "UPDATE {} SET name = ?1 WHERE id = ?2 RETURNING id, name",
                self.table()
            ),
            params![name, id],
            row_to_produce,
        )
        .optional()
        .map_err(|e| internal_error(format!("Failed to update item: {}", e)))?
        .ok_or_else(|| self.not_found(id))
    }

    async fn delete(&self, id: i64) -> StorageResult<()> {
        let conn = self.get_connection()?;

        let affected = conn
            .execute(
                &format!("DELETE FROM {} WHERE id = ?1", self.table()),
                params![id],
            )
            .map_err(|e| internal_error(format!("Failed to delete item: {}", e)))?;

        if affected == 0 {
            return Err(self.not_found(id));
        }

        tracing::debug!(kind = %self.produce_kind(), id, "Deleted item");
        Ok(())
    }

    async fn count(&self) -> StorageResult<u64> {
        let conn = self.get_connection()?;
        let count: i64 = conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", self.table()), [], |row| {
                row.get(0)
            })
            .map_err(|e| internal_error(format!("Failed to count items: {}", e)))?;
        Ok(count as u64)
    }

    async fn health_check(&self) -> StorageResult<()> {
        let conn = self.get_connection().map_err(|_| {
            StorageError::Backend(BackendError::Unavailable {
                backend_name: "sqlite".to_string(),
                message: "Failed to get connection".to_string(),
            })
        })?;
        conn.query_row("SELECT 1", [], |_| Ok(()))
            .map_err(|e| internal_error(format!("Health check failed: {}", e)))
    }
}
