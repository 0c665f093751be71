//! SQLite persistence-unit integration tests.
//!
//! These tests exercise units through the public API only, using file
//! databases in temporary directories.

#![cfg(feature = "sqlite")]

use harvest_persistence::backends::sqlite::SqliteBackend;
use harvest_persistence::core::{BackendKind, ProduceStorage};
use harvest_persistence::error::{ResourceError, StorageError};
use harvest_persistence::types::{ProduceKind, StoredProduce};
use harvest_persistence::unit::{PersistenceUnit, PersistenceUnitConfig, PersistenceUnits};

fn file_url(dir: &tempfile::TempDir, file: &str) -> String {
    format!("sqlite:{}", dir.path().join(file).display())
}

async fn open_units(dir: &tempfile::TempDir) -> PersistenceUnits {
    PersistenceUnits::open(
        PersistenceUnitConfig::new("fruits", ProduceKind::Fruit, file_url(dir, "fruits.db"))
            .with_seed(true),
        PersistenceUnitConfig::new(
            "vegetables",
            ProduceKind::Vegetable,
            file_url(dir, "vegetables.db"),
        )
        .with_seed(true),
    )
    .await
    .expect("Failed to open units")
}

// ============================================================================
// Seeding
// ============================================================================

#[tokio::test]
async fn test_fresh_units_are_seeded() {
    let dir = tempfile::tempdir().unwrap();
    let units = open_units(&dir).await;

    let fruits = units.get(ProduceKind::Fruit).storage().list().await.unwrap();
    let vegetables = units
        .get(ProduceKind::Vegetable)
        .storage()
        .list()
        .await
        .unwrap();

    assert_eq!(fruits.len(), 7);
    assert_eq!(vegetables.len(), 7);
    assert_eq!(fruits[6], StoredProduce::new(7, "Cranberry"));
    assert_eq!(vegetables[6], StoredProduce::new(7, "Garlic"));
}

#[tokio::test]
async fn test_reopen_does_not_reseed() {
    let dir = tempfile::tempdir().unwrap();
    {
        let units = open_units(&dir).await;
        let fruits = units.get(ProduceKind::Fruit).storage();
        fruits.delete(1).await.unwrap();
        fruits.insert("Canteloupe").await.unwrap();
    }

    let units = open_units(&dir).await;
    let fruits = units.get(ProduceKind::Fruit).storage();
    assert_eq!(fruits.count().await.unwrap(), 7);
    assert!(fruits.get(1).await.unwrap().is_none());
    assert_eq!(
        fruits.get(8).await.unwrap(),
        Some(StoredProduce::new(8, "Canteloupe"))
    );
}

// ============================================================================
// Isolation
// ============================================================================

#[tokio::test]
async fn test_units_are_isolated() {
    let dir = tempfile::tempdir().unwrap();
    let units = open_units(&dir).await;
    let fruits = units.get(ProduceKind::Fruit).storage();
    let vegetables = units.get(ProduceKind::Vegetable).storage();

    let created = fruits.insert("Canteloupe").await.unwrap();
    assert_eq!(created.id, 8);

    // Id 8 exists only in the fruit unit.
    assert!(vegetables.get(8).await.unwrap().is_none());
    fruits.delete(7).await.unwrap();
    assert_eq!(
        vegetables.get(7).await.unwrap().map(|item| item.name),
        Some("Garlic".to_string())
    );
    assert_eq!(vegetables.count().await.unwrap(), 7);
}

#[tokio::test]
async fn test_both_kinds_open_on_one_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.db").display().to_string();

    let units = PersistenceUnits::open(
        PersistenceUnitConfig::new("fruits", ProduceKind::Fruit, path.clone()).with_seed(true),
        PersistenceUnitConfig::new("vegetables", ProduceKind::Vegetable, format!("sqlite:{path}"))
            .with_seed(true),
    )
    .await
    .expect("Failed to open units on a shared database");

    let fruits = units.get(ProduceKind::Fruit).storage();
    let vegetables = units.get(ProduceKind::Vegetable).storage();
    assert_eq!(fruits.count().await.unwrap(), 7);
    assert_eq!(vegetables.count().await.unwrap(), 7);

    // Each kind still has its own table.
    fruits.insert("Canteloupe").await.unwrap();
    assert_eq!(vegetables.count().await.unwrap(), 7);
}

#[tokio::test]
async fn test_unit_reports_backend_and_kind() {
    let dir = tempfile::tempdir().unwrap();
    let units = open_units(&dir).await;

    for unit in units.iter() {
        assert_eq!(unit.backend(), Some(BackendKind::Sqlite));
        assert_eq!(unit.storage().backend_name(), "sqlite");
        assert_eq!(unit.storage().kind(), unit.kind());
        unit.storage().health_check().await.unwrap();
    }
}

// ============================================================================
// CRUD through a unit
// ============================================================================

#[tokio::test]
async fn test_update_and_delete_lifecycle() {
    let unit = PersistenceUnit::open(
        PersistenceUnitConfig::new("vegetables", ProduceKind::Vegetable, ":memory:")
            .with_seed(true),
    )
    .await
    .unwrap();
    let storage = unit.storage();

    let created = storage.insert("Eggplant").await.unwrap();
    assert_eq!(created.id, 8);

    let updated = storage.update(created.id, "Okra").await.unwrap();
    assert_eq!(updated, StoredProduce::new(8, "Okra"));

    storage.delete(8).await.unwrap();
    let err = storage.delete(8).await.unwrap_err();
    assert!(matches!(
        err,
        StorageError::Resource(ResourceError::NotFound { .. })
    ));
    assert_eq!(err.to_string(), "vegetable '8' not found");
}

#[tokio::test]
async fn test_from_storage_wraps_backend() {
    let backend = SqliteBackend::in_memory(ProduceKind::Fruit).unwrap();
    let unit = PersistenceUnit::from_storage("fruits", std::sync::Arc::new(backend));

    assert_eq!(unit.name(), "fruits");
    assert_eq!(unit.kind(), ProduceKind::Fruit);
    assert_eq!(unit.storage().count().await.unwrap(), 0);
}
