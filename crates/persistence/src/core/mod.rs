//! Core storage traits and abstractions.
//!
//! - [`ProduceStorage`] - CRUD operations for one persistence unit
//! - [`BackendKind`] - Identifies the database driver behind a unit
//!
//! # Example: Using a Storage Backend
//!
//! ```ignore
//! use harvest_persistence::core::ProduceStorage;
//!
//! async fn rename<S: ProduceStorage + ?Sized>(storage: &S) -> StorageResult<()> {
//!     let created = storage.insert("Canteloupe").await?;
//!     let renamed = storage.update(created.id, "Dragonfruit").await?;
//!     assert_eq!(renamed.id, created.id);
//!     storage.delete(created.id).await
//! }
//! ```

pub mod backend;
pub mod storage;

pub use backend::BackendKind;
pub use storage::{DynStorage, ProduceStorage};
