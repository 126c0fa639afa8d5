//! # Error Module
//!
//! Startup and serving failures for the hello API server.

use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not be bound (port in use, privileged port, bad address)
    #[error("failed to bind listener on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
