//! Task Board Mock API
//!
//! A flat-file CRUD backend for a task client application. The whole
//! persistence layer is one pretty-printed JSON file (`db.json` in the
//! working directory) that every request fully reads and, for mutations,
//! fully rewrites.
//!
//! # Environment Variables
//!
//! - `HOST`: Server bind address (default: `0.0.0.0`)
//! - `PORT`: Server port (default: `3333`)
//! - `RUST_LOG`: Logging level (e.g., `debug`, `taskboard_api=debug`)

use std::env;
use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use taskboard_api::api::{AppState, create_router};
use taskboard_api::infrastructure::FileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    tracing::info!("Starting task board mock API");

    let state = AppState::new(FileStore::default());
    let router = create_router(state);

    let address = server_address()?;
    let listener = TcpListener::bind(address).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("taskboard_api=debug,tower_http=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .init();
}

/// Parses the bind address from `HOST`/`PORT`, defaulting to `0.0.0.0:3333`.
fn server_address() -> anyhow::Result<SocketAddr> {
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(3333);

    format!("{host}:{port}")
        .parse()
        .map_err(|error| anyhow::anyhow!("Invalid server address {host}:{port}: {error}"))
}

/// Handles graceful shutdown signals (SIGINT, SIGTERM).
///
/// Returns a future that completes when a shutdown signal is received. On
/// Unix systems it listens for both SIGINT (Ctrl+C) and SIGTERM; on other
/// systems it only listens for Ctrl+C.
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => {}
            Err(error) => {
                tracing::warn!(%error, "Failed to install Ctrl+C handler");
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::warn!(%error, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
