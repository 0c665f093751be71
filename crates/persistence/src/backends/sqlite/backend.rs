//! SQLite backend implementation.

use std::fmt::Debug;
use std::path::Path;
use std::time::Duration;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use serde::{Deserialize, Serialize};

use crate::core::BackendKind;
use crate::error::{BackendError, StorageError, StorageResult};
use crate::types::ProduceKind;

use super::schema;

/// SQLite backend storing the items of one [`ProduceKind`].
pub struct SqliteBackend {
    pool: Pool<SqliteConnectionManager>,
    config: SqliteBackendConfig,
    kind: ProduceKind,
    is_memory: bool,
}

impl Debug for SqliteBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteBackend")
            .field("kind", &self.kind)
            .field("config", &self.config)
            .field("is_memory", &self.is_memory)
            .finish_non_exhaustive()
    }
}

/// Configuration for the SQLite backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqliteBackendConfig {
    /// Maximum number of connections in the pool.
    ///
    /// Ignored for in-memory databases, which always use a single connection
    /// so every operation sees the same database.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection timeout in milliseconds.
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,

    /// SQLite busy timeout in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u32,

    /// Enable WAL mode for file databases.
    #[serde(default = "default_true")]
    pub enable_wal: bool,
}

fn default_max_connections() -> u32 {
    10
}

fn default_connection_timeout_ms() -> u64 {
    30000
}

fn default_busy_timeout_ms() -> u32 {
    5000
}

fn default_true() -> bool {
    true
}

impl Default for SqliteBackendConfig {
    fn default() -> Self {
        Self {
            max_connections: default_max_connections(),
            connection_timeout_ms: default_connection_timeout_ms(),
            busy_timeout_ms: default_busy_timeout_ms(),
            enable_wal: true,
        }
    }
}

impl SqliteBackend {
    /// Creates a new in-memory SQLite backend with an initialized schema.
    pub fn in_memory(kind: ProduceKind) -> StorageResult<Self> {
        Self::with_config(":memory:", kind, SqliteBackendConfig::default())
    }

    /// Opens or creates a file-based SQLite database with an initialized schema.
    pub fn open<P: AsRef<Path>>(path: P, kind: ProduceKind) -> StorageResult<Self> {
        Self::with_config(path, kind, SqliteBackendConfig::default())
    }

    /// Creates a backend with custom configuration.
    ///
    /// The path `:memory:` opens a private in-memory database.
    pub fn with_config<P: AsRef<Path>>(
        path: P,
        kind: ProduceKind,
        config: SqliteBackendConfig,
    ) -> StorageResult<Self> {
        let is_memory = path.as_ref().to_string_lossy() == ":memory:";

        let busy_timeout = Duration::from_millis(u64::from(config.busy_timeout_ms));
        let enable_wal = config.enable_wal && !is_memory;
        let manager = if is_memory {
            SqliteConnectionManager::memory()
        } else {
            SqliteConnectionManager::file(path.as_ref())
        }
        .with_init(move |conn| {
            conn.busy_timeout(busy_timeout)?;
            if enable_wal {
                conn.pragma_update(None, "journal_mode", "WAL")?;
            }
            Ok(())
        });

        // Every in-memory connection is its own database, so the pool must
        // hold on to exactly one for the lifetime of the backend.
        let builder = if is_memory {
            Pool::builder()
                .max_size(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            Pool::builder().max_size(config.max_connections.max(1))
        };

        let pool = builder
            .connection_timeout(Duration::from_millis(config.connection_timeout_ms))
            .build(manager)
            .map_err(|e| {
                StorageError::Backend(BackendError::ConnectionFailed {
                    backend_name: "sqlite".to_string(),
                    message: e.to_string(),
                })
            })?;

        let backend = Self {
            pool,
            config,
            kind,
            is_memory,
        };
        backend.init_schema()?;

        tracing::debug!(
            kind = %kind,
            is_memory,
            "Opened SQLite backend"
        );

        Ok(backend)
    }

    /// Initialize the database schema.
    pub fn init_schema(&self) -> StorageResult<()> {
        let conn = self.get_connection()?;
        schema::initialize_schema(&conn, self.kind)
    }

    /// Get a connection from the pool.
    pub(crate) fn get_connection(
        &self,
    ) -> StorageResult<PooledConnection<SqliteConnectionManager>> {
        self.pool.get().map_err(|e| {
            StorageError::Backend(BackendError::ConnectionFailed {
                backend_name: "sqlite".to_string(),
                message: e.to_string(),
            })
        })
    }

    /// Returns the backend kind.
    pub fn backend_kind(&self) -> BackendKind {
        BackendKind::Sqlite
    }

    /// Returns the produce kind stored by this backend.
    pub fn produce_kind(&self) -> ProduceKind {
        self.kind
    }

    /// Returns the table holding this backend's items.
    pub(crate) fn table(&self) -> &'static str {
        self.kind.table_name()
    }

    /// Returns whether this is an in-memory database.
    pub fn is_memory(&self) -> bool {
        self.is_memory
    }

    /// Returns the backend configuration.
    pub fn config(&self) -> &SqliteBackendConfig {
        &self.config
    }
}
