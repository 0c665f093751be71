//! SQLite schema definitions and migrations.

use rusqlite::{Connection, OptionalExtension};

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
/// database. Safe to call on an already initialized database.
pub fn initialize_schema(conn: &Connection, kind: ProduceKind) -> StorageResult<()> {
    let current_version = get_schema_version(conn, kind)?;

    if current_version == 0 {
        create_schema_v1(conn, kind)?;
        set_schema_version(conn, kind, SCHEMA_VERSION)?;
        tracing::debug!(kind = %kind, version = SCHEMA_VERSION, "Created SQLite schema");
    } else if current_version > SCHEMA_VERSION {
        return Err(migration_error(format!(
            "database schema version {} is newer than supported version {}",
            current_version, SCHEMA_VERSION
        )));
    }

    Ok(())
}

/// Get the schema version of `kind`'s table, creating the version table if needed.
fn get_schema_version(conn: &Connection, kind: ProduceKind) -> StorageResult<i32> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            kind TEXT PRIMARY KEY,
            version INTEGER NOT NULL
        )",
        [],
    )
    .map_err(|e| migration_error(format!("Failed to create schema_version table: {}", e)))?;

    let version: Option<i32> = conn
        .query_row(
            "SELECT version FROM schema_version WHERE kind = ?1",
            [kind.table_name()],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| migration_error(format!("Failed to query schema version: {}", e)))?;

    Ok(version.unwrap_or(0))
}

/// Set the schema version of `kind`'s table.
fn set_schema_version(conn: &Connection, kind: ProduceKind, version: i32) -> StorageResult<()> {
    conn.execute(
        "INSERT INTO schema_version (kind, version) VALUES (?1, ?2)
         ON CONFLICT(kind) DO UPDATE SET version = excluded.version",
        rusqlite::params![kind.table_name(), version],
    )
    .map_err(|e| migration_error(format!("Failed to set schema_version: {}", e)))?;

    Ok(())
}

/// Create the initial schema (version 1).
fn create_schema_v1(conn: &Connection, kind: ProduceKind) -> StorageResult<()> {
    let table = kind.table_name();
    conn.execute(
        &format!(
            "CREATE TABLE IF NOT EXISTS {table} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            )"
        ),
        [],
    )
    .map_err(|e| migration_error(format!("Failed to create {} table: {}", table, e)))?;

    Ok(())
}
