//! # Server Module
//!
//! Listener bootstrap and route table for the hello API server.

use std::net::SocketAddr;

use axum::{Router, routing::any};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;
use crate::routes::hello::hello;

/// Builds the route table.
///
/// Only `/` is registered, for every method. No fallback is installed, so any
/// other path gets axum's default empty `404 Not Found`.
pub fn router() -> Router {
    Router::new()
        .route("/", any(hello))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

/// Binds the TCP listener. There is no retry and no fallback port.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serves the router on an already bound listener until the process exits.
pub async fn serve(listener: TcpListener) -> Result<(), ServerError> {
    axum::serve(listener, router())
        .await
        .map_err(ServerError::Serve)
}

/// Starts the hello API server.
///
/// Binds `addr` and serves forever. A bind failure is returned to the caller,
/// which treats it as fatal.
pub async fn start(addr: SocketAddr) -> Result<(), ServerError> {
    let listener = bind(addr).await?;

    tracing::info!("📡 Listening on http://{}", addr);
    tracing::info!("👋 Hello endpoint available at http://{}/", addr);

    serve(listener).await
}
