//! Health check endpoint handlers.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// Runs the health check of every persistence unit.
///
/// # HTTP Request
///
/// `GET [base]/health`
///
/// # Response
///
/// - `200 OK` - Every unit answered
/// - `503 Service Unavailable` - At least one unit failed its check
pub async fn health_handler(State(state): State<AppState>) -> Response {
    debug!("Processing health check request");

    let mut healthy = true;
    let mut units = Map::new();

    for unit in state.units().iter() {
        let status = match unit.storage().health_check().await {
            Ok(()) => json!({
                "backend": unit.storage().backend_name(),
                "status": "up",
            }),
            Err(e) => {
                warn!(unit = %unit.name(), error = %e, "Persistence unit health check failed");
                healthy = false;
                json!({
                    "backend": unit.storage().backend_name(),
                    "status": "down",
                    "error": e.to_string(),
                })
            }
        };
        units.insert(unit.kind().to_string(), status);
    }

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let body = json!({
        "status": if healthy { "healthy" } else { "unhealthy" },
        "units": Value::Object(units),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(body)).into_response()
}

/// Handler for a liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}
