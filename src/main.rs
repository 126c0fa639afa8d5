//! # Hello API
//!
//! A fixed-response HTTP server built with Rust, Axum, and Tokio.
//!
//! ## Features
//! - One route: any method on `/` returns `{"message": "Hello from Go"}`
//!   as `application/json`
//! - Every other path gets the default `404 Not Found`
//! - Structured logging with tracing
//!
//! ## Architecture
//! - `server`: listener bootstrap and route table
//! - `config`: environment variable configuration
//! - `error`: startup failure types
//! - `routes`: HTTP route handlers
//!   - `hello`: the fixed JSON endpoint
//!
//! ## Running the Server
//! ```bash
//! cargo run
//! ```
//!
//! The server listens on `0.0.0.0:80` by default. Binding port 80 usually
//! needs elevated privileges; set `PORT` (and optionally `SERVER_HOST`) to
//! listen elsewhere:
//! ```bash
//! PORT=8080 cargo run
//! curl http://localhost:8080/
//! ```

mod config;
mod error;
mod routes;
mod server;

use tracing_subscriber::{ EnvFilter, layer::SubscriberExt, util::SubscriberInitExt };

use crate::config::ServerConfig;

/// Application entry point.
///
/// Initializes logging, resolves the listen address, and serves until the
/// process is terminated. A configuration or bind failure is logged and
/// returned, which exits the process with a non-zero status.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber
        ::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt
                ::layer()
                .with_target(false)
                .compact()
        )
        .init();

    tracing::info!("🏁 Starting Hello API...");
    tracing::info!("📦 Package: {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    tracing::info!("🏗️  Build profile: {}", if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    });

    let config = ServerConfig::from_env().map_err(|e| {
        tracing::error!("Failed to load configuration: {:#}", e);
        e
    })?;
    let addr = config.socket_addr().map_err(|e| {
        tracing::error!("Failed to resolve listen address: {:#}", e);
        e
    })?;

    server::start(addr).await.map_err(|e| {
        tracing::error!("{}", e);
        anyhow::Error::new(e)
    })
}
