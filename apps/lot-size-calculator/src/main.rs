//! Lot Size Calculator Binary
//!
//! Serves the calculator form, JSON API, health and metrics over HTTP.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin lot-size-calculator
//! ```
//!
//! # Environment Variables
//!
//! - `PORT`: HTTP port (default: 3000)
//! - `BIND_ADDRESS`: listen address (default: 0.0.0.0)
//! - `STATIC_DIR`: static asset directory (default: public)
//! - `LOG_FORMAT`: pretty | json (default: pretty)
//! - `RUST_LOG`: Log level (default: info)

use std::time::Duration;

use anyhow::Context;
use lot_size_calculator::infrastructure::telemetry;
use lot_size_calculator::{AppConfig, AppState, create_router, init_metrics};
use tokio::net::TcpListener;
use tokio::signal;
use tokio_util::sync::CancellationToken;

/// Graceful shutdown timeout.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let config = AppConfig::from_env().context("invalid configuration")?;

    telemetry::init(&config.logging);

    tracing::info!("Starting Lot Size Calculator");

    let _metrics_handle = init_metrics();

    log_config(&config);

    let state = AppState::new(env!("CARGO_PKG_VERSION"));
    let app = create_router(state, &config.server.static_dir);

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(addr = %addr, "HTTP server listening");
    tracing::info!("  GET  /                           -> redirect");
    tracing::info!("  GET  /calculateLotSize           - Calculator form");
    tracing::info!("  POST /calculateLotSize           - Calculate (form or JSON)");
    tracing::info!("  POST /api/v1/calculate-lot-size  - Calculate (JSON API)");
    tracing::info!("  GET  /health                     - Health check");
    tracing::info!("  GET  /metrics                    - Prometheus metrics");

    let shutdown_token = CancellationToken::new();
    tokio::spawn(await_shutdown(shutdown_token.clone()));

    let server_shutdown = shutdown_token.clone();
    let server = async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { server_shutdown.cancelled().await })
            .await
    };

    tokio::select! {
        result = server => result.context("HTTP server error")?,
        () = drain_deadline(shutdown_token) => {
            tracing::warn!(
                timeout_secs = SHUTDOWN_TIMEOUT.as_secs(),
                "Shutdown timeout elapsed, dropping open connections"
            );
        }
    }

    tracing::info!("Lot Size Calculator stopped");
    Ok(())
}

/// Load .env file from current directory or any ancestor directory.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Log the parsed configuration.
fn log_config(config: &AppConfig) {
    tracing::info!(
        port = config.server.port,
        bind_address = %config.server.bind_address,
        static_dir = %config.server.static_dir.display(),
        log_format = config.logging.format.as_str(),
        "Configuration loaded"
    );
}

/// Resolves once shutdown has been requested and the drain period has passed.
async fn drain_deadline(shutdown_token: CancellationToken) {
    shutdown_token.cancelled().await;
    tokio::time::sleep(SHUTDOWN_TIMEOUT).await;
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
#[allow(clippy::expect_used)]
async fn await_shutdown(shutdown_token: CancellationToken) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }

    shutdown_token.cancel();

    tracing::info!(
        timeout_secs = SHUTDOWN_TIMEOUT.as_secs(),
        "Graceful shutdown started"
    );
}
