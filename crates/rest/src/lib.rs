//! # harvest-rest - Produce CRUD over HTTP
//!
//! This crate serves two independent resources, `fruit` and `vegetable`, each
//! stored in its own persistence unit. The units may use different database
//! backends; a write to one is never visible in the other.
//!
//! ## Backend Support
//!
//! Storage backends are configured through feature flags:
//!
//! - `sqlite` - SQLite backend (default)
//! - `postgres` - PostgreSQL backend
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use harvest_rest::{ServerConfig, create_app, open_units};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::default();
//!     let units = open_units(&config).await?;
//!     let app = create_app(units, config.clone());
//!
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Operation | HTTP Method | URL Pattern | Success |
//! |-----------|-------------|-------------|---------|
//! | list | GET | `/[kind]` | 200 |
//! | read | GET | `/[kind]/[id]` | 200 |
//! | create | POST | `/[kind]` | 201 |
//! | update | PUT | `/[kind]/[id]` | 200 |
//! | delete | DELETE | `/[kind]/[id]` | 204 |
//! | health | GET | `/health` | 200 |
//! | liveness | GET | `/_liveness` | 200 |
//!
//! ## Error Handling
//!
//! Errors are JSON objects with the status code and a message, or a list of
//! messages for validation failures:
//!
//! | HTTP Status | Cause |
//! |-------------|-------|
//! | 400 | Malformed JSON body |
//! | 404 | Unknown id or route |
//! | 405 | Method not supported on a known path |
//! | 415 | Body is not JSON |
//! | 422 | Blank name, unexpected id, id mismatch |
//! | 500 | Storage failure |
//! | 503 | Database unreachable |
//!
//! ## Architecture
//!
//! - [`error`] - Error types and JSON error bodies
//! - [`config`] - Server configuration
//! - [`state`] - Application state (units, configuration)
//! - [`representation`] - Wire format of items
//! - [`validation`] - Request validation
//! - [`extractors`] - Axum extractors for bodies and path ids
//! - [`handlers`] - HTTP request handlers
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod representation;
pub mod routing;
pub mod state;
pub mod validation;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{RestError, RestResult};
pub use representation::ProduceRepresentation;
pub use state::{AppState, ResourceState};

use axum::Router;
use axum::extract::DefaultBodyLimit;
use harvest_persistence::error::StorageResult;
use harvest_persistence::types::ProduceKind;
use harvest_persistence::unit::PersistenceUnits;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Opens the fruit and vegetable units described by `config`.
pub async fn open_units(config: &ServerConfig) -> StorageResult<PersistenceUnits> {
    PersistenceUnits::open(
        config.unit_config(ProduceKind::Fruit),
        config.unit_config(ProduceKind::Vegetable),
    )
    .await
}

/// Creates the Axum application.
///
/// Sets up every route plus tracing, timeout, body-limit and optional CORS
/// middleware.
///
/// # Example
///
/// ```rust,ignore
/// use harvest_rest::{ServerConfig, create_app, open_units};
///
/// let config = ServerConfig::for_testing();
/// let units = open_units(&config).await?;
/// let app = create_app(units, config);
/// ```
pub fn create_app(units: PersistenceUnits, config: ServerConfig) -> Router {
    for unit in units.iter() {
        info!(
            unit = %unit.name(),
            kind = %unit.kind(),
            backend = %unit.storage().backend_name(),
            "Serving persistence unit"
        );
    }

    let state = AppState::new(units, config.clone());
    let router = routing::create_routes(state);

    // Build middleware stack
    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    let router = router.layer(DefaultBodyLimit::max(config.max_body_size));

    // Add CORS if enabled
    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    // Apply remaining middleware
    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_origins == "*" {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors.allow_origin(origins)
    }
}

/// Initializes the tracing subscriber for logging.
///
/// This should be called once at application startup. `RUST_LOG` overrides
/// `level` when set.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "harvest_rest={level},harvest_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
