//! Database backend implementations.
//!
//! Each backend implements [`ProduceStorage`](crate::core::ProduceStorage) and
//! is gated behind a feature flag.
//!
//! # Available Backends
//!
//! | Backend | Feature | Description |
//! |---------|---------|-------------|
//! | SQLite | `sqlite` | Embedded database, in-memory or file-based |
//! | PostgreSQL | `postgres` | Networked RDBMS with an identity-column primary key |
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(feature = "sqlite")]
//! use harvest_persistence::backends::sqlite::SqliteBackend;
//! # #[cfg(feature = "sqlite")]
//! use harvest_persistence::types::ProduceKind;
//!
//! # #[cfg(feature = "sqlite")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create an in-memory SQLite backend holding fruits
//! let backend = SqliteBackend::in_memory(ProduceKind::Fruit)?;
//!
//! // Or use a file-based database
//! let backend = SqliteBackend::open("./data/vegetables.db", ProduceKind::Vegetable)?;
//! # Ok(())
//! # }
//! ```

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "postgres")]
pub mod postgres;
