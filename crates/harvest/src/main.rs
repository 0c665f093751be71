//! Harvest
//!
//! Serves fruits and vegetables, each from its own database.

use clap::Parser;
use harvest_rest::{ServerConfig, create_app, init_logging, open_units};
use tracing::info;

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    info!(
        port = config.port,
        host = %config.host,
        "Starting Harvest"
    );

    let units = open_units(&config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open persistence units: {}", e))?;

    let app = create_app(units, config.clone());
    serve(app, &config).await
}

#[cfg(not(any(feature = "sqlite", feature = "postgres")))]
compile_error!("At least one database backend feature must be enabled");
