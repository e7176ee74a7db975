use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::connector::api::Container;

use super::handlers;

/// Builds the API routes around a shared container.
pub fn build_router(container: Arc<Container>) -> Router {
    Router::new()
        .route("/chat", post(handlers::chat))
        .route("/conversations", get(handlers::conversations))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(container)
}

/// Serves the API until Ctrl+C.
pub async fn serve(container: Arc<Container>, addr: SocketAddr) -> Result<()> {
    let app = build_router(container);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
            info!("Shutting down HTTP API");
        })
        .await?;

    Ok(())
}
