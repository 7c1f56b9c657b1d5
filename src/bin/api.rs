//! Code Review API Server
//!
//! Run with: cargo run --bin codereview-api
//!
//! # Configuration
//!
//! Read from the default config locations, then environment variables:
//! - `CODEREVIEW_SERVER_HOST`: Host to bind to (default: 0.0.0.0)
//! - `CODEREVIEW_SERVER_PORT`: Port to listen on (default: 8000)
//! - `CODEREVIEW_LOG_LEVEL`, `CODEREVIEW_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Log filter, overrides the level above

use codereview::config::Config;
use codereview::server::{serve, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = Config::load_default();
    codereview::telemetry::init(&loaded.config.logging, "tower_http=debug");
    loaded.log();
    let config = loaded.config;

    tracing::info!("Starting code review API server v{}", env!("CARGO_PKG_VERSION"));

    let state = AppState::new(config.server.clone());
    serve(state).await?;

    tracing::info!("Code review API server stopped");
    Ok(())
}
