//! REST API test harness.

use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use harvest_persistence::core::{DynStorage, ProduceStorage};
use harvest_persistence::error::{BackendError, StorageError, StorageResult};
use harvest_persistence::types::{ProduceKind, StoredProduce};
use harvest_persistence::unit::{PersistenceUnit, PersistenceUnits};

use harvest_rest::{ServerConfig, create_app, open_units};

/// A test server plus direct handles on the units behind it.
pub struct TestApp {
    /// The test server instance.
    pub server: TestServer,

    /// The units served by the app.
    pub units: PersistenceUnits,
}

impl TestApp {
    /// Serves two seeded in-memory SQLite units.
    pub async fn new() -> Self {
        Self::with_config(ServerConfig::for_testing()).await
    }

    /// Serves the units described by `config`.
    pub async fn with_config(config: ServerConfig) -> Self {
        let units = open_units(&config).await.expect("Failed to open units");
        Self::with_units(units, config)
    }

    /// Serves already opened units.
    pub fn with_units(units: PersistenceUnits, config: ServerConfig) -> Self {
        let app = create_app(units.clone(), config);
        let server = TestServer::new(app).expect("Failed to create test server");
        Self { server, units }
    }

    /// Returns the storage behind `kind`.
    pub fn storage(&self, kind: ProduceKind) -> &DynStorage {
        self.units.get(kind).storage()
    }
}

/// Storage whose database is never reachable.
pub struct UnreachableStorage {
    kind: ProduceKind,
}

impl UnreachableStorage {
    /// Wraps the storage as a unit.
    pub fn unit(kind: ProduceKind) -> PersistenceUnit {
        PersistenceUnit::from_storage("unreachable", Arc::new(Self { kind }))
    }

    fn error() -> StorageError {
        StorageError::Backend(BackendError::ConnectionFailed {
            backend_name: "unreachable".to_string(),
            message: "connection refused".to_string(),
        })
    }
}

#[async_trait]
impl ProduceStorage for UnreachableStorage {
    fn backend_name(&self) -> &'static str {
        "unreachable"
    }

    fn kind(&self) -> ProduceKind {
        self.kind
    }

    async fn list(&self) -> StorageResult<Vec<StoredProduce>> {
        Err(Self::error())
    }

    async fn get(&self, _id: i64) -> StorageResult<Option<StoredProduce>> {
        Err(Self::error())
    }

    async fn insert(&self, _name: &str) -> StorageResult<StoredProduce> {
        Err(Self::error())
    }

    async fn update(&self, _id: i64, _name: &str) -> StorageResult<StoredProduce> {
        Err(Self::error())
    }

    async fn delete(&self, _id: i64) -> StorageResult<()> {
        Err(Self::error())
    }

    async fn count(&self) -> StorageResult<u64> {
        Err(Self::error())
    }

    async fn health_check(&self) -> StorageResult<()> {
        Err(Self::error())
    }
}
