//! Persistence units.
//!
//! A persistence unit binds one [`ProduceKind`] to one database. The backend is
//! chosen from the database URL, so the fruit unit can live in SQLite while the
//! vegetable unit lives in PostgreSQL.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{BackendKind, DynStorage};
use crate::error::{BackendError, StorageError, StorageResult, ValidationError};
use crate::seed::apply_seed_if_empty;
use crate::types::ProduceKind;

/// Configuration for a single persistence unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceUnitConfig {
    /// Unit name used in logs and errors, e.g. `fruits`.
    pub name: String,

    /// Kind of item stored by the unit.
    pub kind: ProduceKind,

    /// Database URL: `postgres://...`, `sqlite:<path>`, `:memory:` or a file path.
    pub database_url: String,

    /// Maximum pooled connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Load seed data into an empty table on open.
    #[serde(default)]
    pub seed: bool,
}

fn default_max_connections() -> u32 {
    10
}

impl PersistenceUnitConfig {
    /// Creates a configuration with default pool size and no seeding.
    pub fn new(name: impl Into<String>, kind: ProduceKind, database_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            database_url: database_url.into(),
            max_connections: default_max_connections(),
            seed: false,
        }
    }

    /// Sets whether seed data is loaded into an empty table.
    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the maximum number of pooled connections.
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Returns the backend selected by the database URL.
    pub fn backend_kind(&self) -> BackendKind {
        BackendKind::from_url(&self.database_url)
    }

    /// Returns the SQLite path for the URL, stripping an optional `sqlite:` scheme.
    pub fn sqlite_path(&self) -> &str {
        let url = self.database_url.as_str();
        url.strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url)
    }

    /// Returns the database the URL points at, independent of how it is spelled.
    ///
    /// SQLite URLs reduce to their file path; PostgreSQL URLs reduce to
    /// `host:port/dbname` with the default port and database filled in.
    /// In-memory databases are private to their unit and return `None`.
    pub fn database_target(&self) -> Option<String> {
        match self.backend_kind() {
            BackendKind::Sqlite => {
                let path = self.sqlite_path();
                if path == ":memory:" {
                    return None;
                }
                Some(format!("sqlite:{}", path.trim_start_matches("./")))
            }
            BackendKind::Postgres => Some(postgres_target(&self.database_url)),
        }
    }

    fn invalid(&self, message: impl Into<String>) -> StorageError {
        StorageError::Validation(ValidationError::InvalidUnit {
            unit: self.name.clone(),
            message: message.into(),
        })
    }
}

fn postgres_target(url: &str) -> String {
    let rest = url
        .strip_prefix("postgres://")
        .or_else(|| url.strip_prefix("postgresql://"))
        .unwrap_or(url);
    let rest = rest.split_once('?').map_or(rest, |(head, _)| head);
    let hostpart = rest.rsplit_once('@').map_or(rest, |(_, hostpart)| hostpart);
    let (hostport, dbname) = hostpart.split_once('/').unwrap_or((hostpart, ""));
    let (host, port) = hostport.rsplit_once(':').unwrap_or((hostport, ""));

    let host = if host.is_empty() { "localhost" } else { host };
    let port = if port.is_empty() { "5432" } else { port };
    let dbname = if dbname.is_empty() { "harvest" } else { dbname };
    format!("postgres://{}:{}/{}", host.to_ascii_lowercase(), port, dbname)
}

/// An opened persistence unit.
#[derive(Clone)]
pub struct PersistenceUnit {
    name: String,
    kind: ProduceKind,
    backend: Option<BackendKind>,
    storage: DynStorage,
}

impl fmt::Debug for PersistenceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistenceUnit")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

impl PersistenceUnit {
    /// Opens the database, initializes its schema and seeds it when requested.
    ///
    /// # Errors
    ///
    /// * `ValidationError::InvalidUnit` - If the database URL is empty
    /// * `BackendError::NotEnabled` - If the URL needs a backend that is not compiled in
    /// * `BackendError::ConnectionFailed` - If the database cannot be reached
    pub async fn open(config: PersistenceUnitConfig) -> StorageResult<Self> {
        if config.database_url.trim().is_empty() {
            return Err(config.invalid("database URL must not be empty"));
        }

        let backend = config.backend_kind();
        let storage = open_storage(&config, backend).await?;

        if config.seed {
            apply_seed_if_empty(storage.as_ref()).await?;
        }

        tracing::info!(
            unit = %config.name,
            kind = %config.kind,
            backend = %backend,
            "Opened persistence unit"
        );

        Ok(Self::from_storage(config.name, storage))
    }

    /// Wraps an already constructed storage as a unit.
    pub fn from_storage(name: impl Into<String>, storage: DynStorage) -> Self {
        let backend = BackendKind::from_name(storage.backend_name());
        Self {
            name: name.into(),
            kind: storage.kind(),
            backend,
            storage,
        }
    }

    /// Returns the unit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the kind of item stored by the unit.
    pub fn kind(&self) -> ProduceKind {
        self.kind
    }

    /// Returns the built-in backend behind the unit, or `None` for any other
    /// storage passed to [`PersistenceUnit::from_storage`].
    pub fn backend(&self) -> Option<BackendKind> {
        self.backend
    }

    /// Returns the unit's storage.
    pub fn storage(&self) -> &DynStorage {
        &self.storage
    }
}

#[allow(unused_variables)]
async fn open_storage(
    config: &PersistenceUnitConfig,
    backend: BackendKind,
) -> StorageResult<DynStorage> {
    match backend {
        BackendKind::Sqlite => {
            #[cfg(feature = "sqlite")]
            {
                use crate::backends::sqlite::{SqliteBackend, SqliteBackendConfig};

                let sqlite_config = SqliteBackendConfig {
                    max_connections: config.max_connections,
                    ..Default::default()
                };
                let storage =
                    SqliteBackend::with_config(config.sqlite_path(), config.kind, sqlite_config)?;
                Ok(Arc::new(storage))
            }
            #[cfg(not(feature = "sqlite"))]
            {
                Err(not_enabled(backend))
            }
        }
        BackendKind::Postgres => {
            #[cfg(feature = "postgres")]
            {
                use crate::backends::postgres::{PostgresBackend, PostgresConfig};

                let mut pg_config = PostgresConfig::from_url(&config.database_url)?;
                pg_config.max_connections = config.max_connections as usize;
                let storage = PostgresBackend::new(pg_config, config.kind).await?;
                Ok(Arc::new(storage))
            }
            #[cfg(not(feature = "postgres"))]
            {
                Err(not_enabled(backend))
            }
        }
    }
}

#[allow(dead_code)]
fn not_enabled(backend: BackendKind) -> StorageError {
    StorageError::Backend(BackendError::NotEnabled {
        backend_name: backend.to_string(),
        feature: backend.feature().to_string(),
    })
}

/// The fruit and vegetable units used by the service.
#[derive(Debug, Clone)]
pub struct PersistenceUnits {
    fruits: PersistenceUnit,
    vegetables: PersistenceUnit,
}

impl PersistenceUnits {
    /// Pairs the two units, checking each holds the kind it is used for.
    pub fn new(fruits: PersistenceUnit, vegetables: PersistenceUnit) -> StorageResult<Self> {
        for (unit, expected) in [
            (&fruits, ProduceKind::Fruit),
            (&vegetables, ProduceKind::Vegetable),
        ] {
            if unit.kind() != expected {
                return Err(StorageError::Validation(ValidationError::InvalidUnit {
                    unit: unit.name().to_string(),
                    message: format!("expected a {} unit, found {}", expected, unit.kind()),
                }));
            }
        }
        Ok(Self { fruits, vegetables })
    }

    /// Opens both units.
    pub async fn open(
        fruits: PersistenceUnitConfig,
        vegetables: PersistenceUnitConfig,
    ) -> StorageResult<Self> {
        let fruits = PersistenceUnit::open(fruits).await?;
        let vegetables = PersistenceUnit::open(vegetables).await?;
        Self::new(fruits, vegetables)
    }

    /// Returns the unit holding `kind`.
    pub fn get(&self, kind: ProduceKind) -> &PersistenceUnit {
        match kind {
            ProduceKind::Fruit => &self.fruits,
            ProduceKind::Vegetable => &self.vegetables,
        }
    }

    /// Iterates over both units, fruits first.
    pub fn iter(&self) -> impl Iterator<Item = &PersistenceUnit> {
        [&self.fruits, &self.vegetables].into_iter()
    }
}
