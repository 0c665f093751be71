//! Harvest Persistence Layer
//!
//! This crate stores produce items (fruits and vegetables) for the Harvest
//! service. Every entity type is bound to its own database through a
//! *persistence unit*, so two units can live on entirely different backends
//! within a single process.
//!
//! # Features
//!
//! - **Multiple Backends**: SQLite (default) and PostgreSQL
//! - **Persistence Units**: One isolated database per entity type
//! - **Seed Data**: Optional initial rows for empty tables
//!
//! # Backend Features
//!
//! Enable backends with feature flags in `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! harvest-persistence = { version = "0.1", features = ["postgres"] }
//! ```
//!
//! Available backend features:
//! - `sqlite` (default) - SQLite with in-memory and file modes
//! - `postgres` - PostgreSQL via `tokio-postgres` and `deadpool-postgres`
//!
//! # Architecture
//!
//! - [`types`] - Produce kinds and stored items
//! - [`error`] - Error types for all operations
//! - [`core`] - The [`ProduceStorage`](core::ProduceStorage) trait and backend kinds
//! - [`backends`] - Backend implementations
//! - [`unit`] - Persistence-unit configuration and opening
//! - [`seed`] - Initial data loaded into empty units
//!
//! # Quick Start
//!
//! ```no_run
//! # #[cfg(feature = "sqlite")]
//! # async fn example() -> Result<(), harvest_persistence::error::StorageError> {
//! use harvest_persistence::core::ProduceStorage;
//! use harvest_persistence::types::ProduceKind;
//! use harvest_persistence::unit::{PersistenceUnit, PersistenceUnitConfig};
//!
//! let unit = PersistenceUnit::open(
//!     PersistenceUnitConfig::new("fruits", ProduceKind::Fruit, ":memory:").with_seed(true),
//! )
//! .await?;
//!
//! let cranberry = unit.storage().get(7).await?;
//! assert_eq!(cranberry.map(|item| item.name), Some("Cranberry".to_string()));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod seed;
pub mod types;
pub mod unit;
