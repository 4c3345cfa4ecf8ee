//! Prazos AIA HTTP Server Binary
//!
//! Entry point for the REST API server: resolves configuration, initializes
//! the repository, sets up the router and serves requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin prazos-server --features "local-repo,http-server"
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `PRAZOS_CONFIG`: Optional TOML file with regime-offset overrides
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use prazos_aia::config::AppConfig;
use prazos_aia::db;
use prazos_aia::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Prazos AIA HTTP Server");

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    info!(
        "Default regime: {} ({} business days)",
        config.default_regime.label(),
        config.default_regime.nominal_length()
    );

    // Initialize global repository once and reuse it across the app
    db::init_repository()?;
    let repository = std::sync::Arc::clone(db::get_repository()?);
    info!("Repository initialized successfully");

    // Create application state and router
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let state = AppState::new(repository, config);
    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    info!("API documentation: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
