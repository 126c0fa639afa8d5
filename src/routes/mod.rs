// # Routes Module
//
// - HTTP route handlers for the hello API server.
// - The server registers a single route; see `server::router`.

/// Fixed-response root endpoint
pub mod hello;
