//! PostgreSQL schema definitions and migrations.

use crate::error::{BackendError, StorageError, StorageResult};
use crate::types::ProduceKind;

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 1;

fn migration_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::MigrationError { message })
}

/// Initialize the database schema for `kind`.
///
/// Versions are tracked per table, so units of different kinds can share one
/// database.
pub async fn initialize_schema(
    client: &deadpool_postgres::Client,
    kind: ProduceKind,
) -> StorageResult<()> {
    let current_version = get_schema_version(client, kind).await?;

    if current_version == 0 {
        create_schema_v1(client, kind).await?;
        set_schema_version(client, kind, SCHEMA_VERSION).await?;
        tracing::debug!(kind = %kind, version = SCHEMA_VERSION, "Created PostgreSQL schema");
    } else if current_version > SCHEMA_VERSION {
        return Err(migration_error(format!(
            "database schema version {} is newer than supported version {}",
            current_version, SCHEMA_VERSION
        )));
    }

    Ok(())
}

/// Get the schema version of `kind`'s table.
async fn get_schema_version(
    client: &deadpool_postgres::Client,
    kind: ProduceKind,
) -> StorageResult<i32> {
    client
        .execute(
            "CREATE TABLE IF NOT EXISTS schema_version (
                kind TEXT PRIMARY KEY,
                version INTEGER NOT NULL
            )",
            &[],
        )
        .await
        .map_err(|e| migration_error(format!("Failed to create schema_version table: {}", e)))?;

    let row = client
        .query_opt(
            "SELECT version FROM schema_version WHERE kind = $1",
            &[&kind.table_name()],
        )
        .await
        .map_err(|e| migration_error(format!("Failed to query schema version: {}", e)))?;

    Ok(row.map(|r| r.get::<_, i32>(0)).unwrap_or(0))
}

/// Set the schema version of `kind`'s table.
async fn set_schema_version(
    client: &deadpool_postgres::Client,
    kind: ProduceKind,
    version: i32,
) -> StorageResult<()> {
    client
        .execute(
            "INSERT INTO schema_version (kind, version) VALUES ($1, $2)
             ON CONFLICT (kind) DO UPDATE SET version = EXCLUDED.version",
            &[&kind.table_name(), &version],
        )
        .await
        .map_err(|e| migration_error(format!("Failed to set schema_version: {}", e)))?;

    Ok(())
}

/// Create the initial schema (version 1).
async fn create_schema_v1(
    client: &deadpool_postgres::Client,
    kind: ProduceKind,
) -> StorageResult<()> {
    let table = kind.table_name();
    client
        .execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS {table} (
                    id BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
                    name TEXT NOT NULL
                )"
            ),
            &[],
        )
        .await
        .map_err(|e| migration_error(format!("Failed to create {} table: {}", table, e)))?;

    Ok(())
}
