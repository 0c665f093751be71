//! Error types for the Harvest REST API.
//!
//! Every failure is rendered as a JSON body carrying the numeric status and
//! either a single message or a list of validation messages:
//!
//! ```json
//! {"code": 404, "error": "fruit '999' not found"}
//! {"code": 422, "error": {"message": ["Fruit name must be set!"]}}
//! ```
//!
//! # Error Mapping
//!
//! | Storage Error | HTTP Status |
//! |--------------|-------------|
//! | NotFound | 404 |
//! | MissingRequiredField | 422 |
//! | Unavailable / ConnectionFailed | 503 |
//! | any other BackendError | 500 |
//!
//! Routing failures use the same body: an unknown path is a 404 and an
//! unsupported method on a known path is a 405.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use harvest_persistence::error::{BackendError, ResourceError, StorageError, ValidationError};
use harvest_persistence::types::ProduceKind;
use serde_json::{Value, json};
use std::fmt;

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Item not found (HTTP 404).
    NotFound {
        /// The kind of item requested.
        kind: ProduceKind,
        /// The id exactly as it appeared in the path.
        id: String,
    },

    /// No route matched the request path (HTTP 404).
    NoRoute {
        /// The request path.
        path: String,
    },

    /// The path exists but not for this method (HTTP 405).
    MethodNotAllowed {
        /// The request method.
        method: String,
        /// The request path.
        path: String,
    },

    /// The item failed validation (HTTP 422).
    Validation {
        /// Every violated constraint.
        messages: Vec<String>,
    },

    /// A create request carried an id (HTTP 422).
    UnexpectedId,

    /// An update body named a different id than the path (HTTP 422).
    IdMismatch {
        /// Id in the request body.
        body_id: i64,
        /// Id in the request path.
        path_id: i64,
    },

    /// Unsupported media type (HTTP 415).
    UnsupportedMediaType {
        /// The unsupported content type, empty when the header was missing.
        content_type: String,
    },

    /// Malformed request body (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },

    /// A database could not be reached (HTTP 503).
    ServiceUnavailable {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::NotFound { kind, id } => write!(f, "{} '{}' not found", kind, id),
            RestError::NoRoute { path } => write!(f, "No route for {}", path),
            RestError::MethodNotAllowed { method, path } => {
                write!(f, "Method {} not allowed for {}", method, path)
            }
            RestError::Validation { messages } => {
                write!(f, "Validation failed: {}", messages.join("; "))
            }
            RestError::UnexpectedId => write!(f, "unexpected ID in request"),
            RestError::IdMismatch { body_id, path_id } => write!(
                f,
                "ID in request body ({}) does not match path ({})",
                body_id, path_id
            ),
            RestError::UnsupportedMediaType { content_type } => {
                write!(f, "Content type '{}' is not supported", content_type)
            }
            RestError::BadRequest { message } => write!(f, "{}", message),
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
            RestError::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {}", message)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl RestError {
    /// Returns the HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            RestError::NotFound { .. } | RestError::NoRoute { .. } => StatusCode::NOT_FOUND,
            RestError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            RestError::Validation { .. }
            | RestError::UnexpectedId
            | RestError::IdMismatch { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            RestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Builds the JSON error body.
    pub fn body(&self) -> Value {
        let status = self.status();
        match self {
            RestError::Validation { messages } => create_error_body_multi(status, messages),
            _ => create_error_body(status, &self.to_string()),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(status = status.as_u16(), error = %self, "Request failed");
        }
        (status, Json(self.body())).into_response()
    }
}

/// Creates an error body with a single message.
pub fn create_error_body(status: StatusCode, message: &str) -> Value {
    json!({
        "code": status.as_u16(),
        "error": message
    })
}

/// Creates an error body listing several validation messages.
pub fn create_error_body_multi(status: StatusCode, messages: &[String]) -> Value {
    json!({
        "code": status.as_u16(),
        "error": {
            "message": messages
        }
    })
}

// Implement conversions from storage errors

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Resource(e) => e.into(),
            StorageError::Validation(e) => e.into(),
            StorageError::Backend(e) => e.into(),
        }
    }
}

impl From<ResourceError> for RestError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { kind, id } => RestError::NotFound { kind, id },
        }
    }
}

impl From<ValidationError> for RestError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::MissingRequiredField { kind, field } => RestError::Validation {
                messages: vec![format!("{} {} must be set!", kind.label(), field)],
            },
            ValidationError::InvalidUnit { .. } => RestError::InternalError {
                message: err.to_string(),
            },
        }
    }
}

impl From<BackendError> for RestError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Unavailable { .. } | BackendError::ConnectionFailed { .. } => {
                RestError::ServiceUnavailable {
                    message: err.to_string(),
                }
            }
            _ => RestError::InternalError {
                message: err.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        RestError::BadRequest {
            message: format!("Invalid JSON: {}", err),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;
