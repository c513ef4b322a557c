//! Collatz dashboard HTTP server.
//!
//! Serves the dashboard page at `/` and the JSON API under `/v1`.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin collatz-dash-server
//! PORT=8050 WORKERS=3 cargo run --release --bin collatz-dash-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `WORKERS`: Runtime worker threads (default: 3)
//! - `REQUEST_TIMEOUT_SECS`: Per-request timeout (default: 120)
//! - `MAX_TRAJECTORIES`, `MAX_START_LIMIT`: ceilings on the dashboard controls
//! - `JOB_RETENTION_SECS`: how long finished render jobs are kept (default: 3600)
//! - `RUST_LOG`: Log filter (default: info)

use tracing::info;
use tracing_subscriber::EnvFilter;

use collatz_dash::config::ServerConfig;
use collatz_dash::http::{create_router_with_timeout, AppState};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let config = ServerConfig::from_env()?;

    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.workers)
        .enable_all()
        .build()?
        .block_on(serve(config))
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    info!("Starting Collatz dashboard");

    let state = AppState::from_config(&config);
    let app = create_router_with_timeout(state, config.request_timeout);

    let addr = config.bind_addr()?;
    info!(
        workers = config.workers,
        timeout_secs = config.request_timeout.as_secs(),
        max_trajectories = config.limits.max_trajectories,
        "Server listening on http://{}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
