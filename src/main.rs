//! filecache - A small file upload/download server
//!
//! Uploaded files are kept in a fixed-capacity in-memory LRU cache keyed by
//! filename.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use tokio::{signal, sync::watch};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use filecache::{api::create_router, AppState, Config};

/// Main entry point for the file cache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the shared cache and router
/// 4. Start HTTP server on configured port
/// 5. On SIGINT/SIGTERM, drain connections for at most `shutdown_timeout`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "filecache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_capacity={}, port={}, static_dir={}, max_upload_bytes={}, shutdown_timeout={}s",
        config.cache_capacity,
        config.server_port,
        config.static_dir.display(),
        config.max_upload_bytes,
        config.shutdown_timeout
    );
    if config.cache_capacity == 0 {
        warn!("CACHE_CAPACITY is 0, the cache will grow without bound");
    }

    let app = create_router(AppState::from_config(&config));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server running on http://{}. Press CTRL-C to exit.", addr);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(());
    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.changed().await;
            })
            .await
    });

    shutdown_signal().await;
    let _ = shutdown_tx.send(());
    info!("Shutting down server...");

    let grace = Duration::from_secs(config.shutdown_timeout);
    match tokio::time::timeout(grace, server).await {
        Ok(joined) => joined
            .context("server task panicked")?
            .context("server error")?,
        Err(_) => warn!(
            "Connections still open after {}s, exiting anyway",
            config.shutdown_timeout
        ),
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
