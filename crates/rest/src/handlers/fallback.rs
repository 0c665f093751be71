//! Handlers for requests that match no route or no method.

use axum::http::{Method, Uri};

use crate::error::RestError;

/// Rejects an unmatched request with a JSON 404.
pub async fn fallback_handler(uri: Uri) -> RestError {
    RestError::NoRoute {
        path: uri.path().to_string(),
    }
}

/// Rejects a known path requested with an unsupported method with a JSON 405.
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> RestError {
    RestError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
