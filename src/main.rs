//! Redis Gateway - A lightweight HTTP front-end for a key-value cache
//!
//! Stores and retrieves JSON values in an external cache service with
//! server-side expiry.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use redis_gateway::{api::create_router, AppState, Config, RedisCache};

/// Main entry point for the cache gateway.
///
/// # Startup Sequence
/// 1. Load `.env` and initialize tracing subscriber for logging
/// 2. Load configuration from environment variables (REDIS_URL required)
/// 3. Connect to the cache service; startup fails if it is unreachable
/// 4. Create Axum router with all endpoints
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redis_gateway=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Redis Gateway");

    // Load configuration from environment variables
    let config = Config::from_env()?;
    // redis_url is not logged; it may embed credentials
    info!(
        "Configuration loaded: port={}, default_ttl={}s",
        config.server_port, config.default_ttl
    );

    // Connect to the cache service; after this succeeds, the connection
    // manager reconnects on its own, so later outages fail per-request
    let cache = RedisCache::connect(&config.redis_url).await?;
    info!("Connected to cache service");

    // Create application state with the shared cache client
    let state = AppState::new(Arc::new(cache), config.default_ttl);

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
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
