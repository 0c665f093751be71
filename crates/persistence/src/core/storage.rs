//! Core produce storage trait.
//!
//! This module defines the [`ProduceStorage`] trait, the capability set every
//! persistence unit implements: list, get, insert, update and delete.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::StorageResult;
use crate::types::{ProduceKind, StoredProduce};

/// Storage for the items of a single [`ProduceKind`].
///
/// An implementation is bound to exactly one database and one kind when it is
/// constructed; callers never pass the kind per operation.
///
/// # Identifiers
///
/// `insert` lets the database assign the identifier. Identifiers are strictly
/// increasing within a store and are not reused after a delete.
///
/// # Deletes
///
/// `delete` removes the row permanently. A second delete of the same id fails
/// with `ResourceError::NotFound`.
#[async_trait]
pub trait ProduceStorage: Send + Sync {
    /// Returns a human-readable name for this storage backend.
    fn backend_name(&self) -> &'static str;

    /// Returns the kind of item this storage holds.
    fn kind(&self) -> ProduceKind;

    /// Returns every item ordered by id.
    async fn list(&self) -> StorageResult<Vec<StoredProduce>>;

    /// Reads an item by id.
    ///
    /// Returns `Ok(None)` when no item has this id.
    async fn get(&self, id: i64) -> StorageResult<Option<StoredProduce>>;

    /// Inserts a new item and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// * `StorageError::Validation(MissingRequiredField)` - If `name` is blank
    async fn insert(&self, name: &str) -> StorageResult<StoredProduce>;

    /// Replaces the name of an existing item.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If no item has this id
    /// * `StorageError::Validation(MissingRequiredField)` - If `name` is blank
    async fn update(&self, id: i64, name: &str) -> StorageResult<StoredProduce>;

    /// Permanently deletes an item.
    ///
    /// # Errors
    ///
    /// * `StorageError::Resource(NotFound)` - If no item has this id
    async fn delete(&self, id: i64) -> StorageResult<()>;

    /// Counts the stored items.
    async fn count(&self) -> StorageResult<u64>;

    /// Verifies the database answers a trivial query.
    async fn health_check(&self) -> StorageResult<()>;
}

/// Shared, type-erased storage handle.
pub type DynStorage = Arc<dyn ProduceStorage>;

/// Rejects blank names before they reach a backend.
pub(crate) fn require_name(kind: ProduceKind, name: &str) -> StorageResult<()> {
    if name.trim().is_empty() {
        return Err(crate::error::ValidationError::MissingRequiredField {
            kind,
            field: "name".to_string(),
        }
        .into());
    }
    Ok(())
}
