//! Configuration module for environment variables and listener settings

use std::env;
use std::net::{SocketAddr, ToSocketAddrs};
use anyhow::{Context, Result, anyhow};

/// Listen host used when `SERVER_HOST` is unset (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Listen port used when `PORT` is unset
pub const DEFAULT_PORT: u16 = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Missing keys fall back to the defaults; a `PORT` that is present but
    /// not a valid `u16` is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SERVER_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    /// Resolve `host:port` to the socket address the listener binds to
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))?
            .next()
            .ok_or_else(|| anyhow!("no address resolved for {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_to_all_interfaces_on_port_80() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.socket_addr().unwrap(), SocketAddr::from(([0, 0, 0, 0], 80)));
    }

    #[test]
    fn env_overrides_host_and_port() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.socket_addr().unwrap(), SocketAddr::from(([127, 0, 0, 1], 8080)));
    }

    #[test]
    fn blank_host_falls_back_to_default() {
        let config = ServerConfig::from_lookup(lookup_from(&[("SERVER_HOST", "  ")])).unwrap();
        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn rejects_unparseable_port() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));

        assert!(ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
    }
}
