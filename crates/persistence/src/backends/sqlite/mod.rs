//! SQLite backend implementation.
//!
//! Supports in-memory databases (used by the test suites) and file-based
//! databases (for development and small deployments).
//!
//! # Schema
//!
//! One table per backend, named after the kind it stores:
//!
//! ```sql
//! CREATE TABLE fruit (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     name TEXT NOT NULL
//! );
//! ```
//!
//! `AUTOINCREMENT` keeps identifiers from being reused after a delete.

mod backend;
mod schema;
mod storage;

pub use backend::{SqliteBackend, SqliteBackendConfig};
