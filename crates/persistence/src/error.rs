//! Error types for the persistence layer.
//!
//! Errors are split by category: resource state, validation of stored values,
//! and failures raised by the database backend itself.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::types::ProduceKind;

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Resource state errors
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// Validation errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend-specific errors
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors related to resource state.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// The requested item was not found.
    #[error("{kind} '{id}' not found")]
    NotFound { kind: ProduceKind, id: String },
}

/// Errors related to the values handed to storage.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field was missing or blank.
    #[error("missing required field: {kind} {field}")]
    MissingRequiredField { kind: ProduceKind, field: String },

    /// The persistence unit configuration is unusable.
    #[error("invalid persistence unit '{unit}': {message}")]
    InvalidUnit { unit: String, message: String },
}

/// Errors originating from the database backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backend is currently unavailable.
    #[error("backend unavailable: {backend_name}")]
    Unavailable {
        backend_name: String,
        message: String,
    },

    /// Connection to the backend failed.
    #[error("connection failed to {backend_name}: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// The backend was requested but not compiled in.
    #[error("backend '{backend_name}' requires the '{feature}' feature")]
    NotEnabled {
        backend_name: String,
        feature: String,
    },

    /// Schema migration error.
    #[error("schema migration failed: {message}")]
    MigrationError { message: String },

    /// Internal backend error.
    #[error("internal error in {backend_name}: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl StorageError {
    /// Returns true if the error means the item does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::Resource(ResourceError::NotFound { .. }))
    }

    /// Returns true if the backend could not be reached at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StorageError::Backend(
                BackendError::Unavailable { .. } | BackendError::ConnectionFailed { .. }
            )
        )
    }
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
