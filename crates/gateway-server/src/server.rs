//! HTTP listener and top-level server wiring.
//!
//! This module:
//! - Builds the router over shared [`AppState`].
//! - Binds the configured address/port.
//! - Serves until Ctrl-C.
//!
//! Handlers live in [`crate::routes`].

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::routes;
use crate::state::AppState;

/// Router with all routes and per-request tracing.
pub fn build_router(state: AppState) -> Router {
    routes::routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server with the given configuration and the host clock.
pub async fn run(config: Config) -> Result<()> {
    serve(config, AppState::new()).await
}

pub async fn serve(config: Config, state: AppState) -> Result<()> {
    let addr = config.socket_addr_string();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Server(format!("failed to bind {}: {}", addr, e)))?;
    info!("Listening on {}", addr);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| Error::Server(e.to_string()))?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
}
