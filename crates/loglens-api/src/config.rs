//! API server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Configuration for the log API server.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Address to bind the HTTP server to.
    pub bind_addr: SocketAddr,
    /// Directory the log store scans for flat log files.
    pub log_dir: PathBuf,
    /// CORS allowed origins (empty means all).
    pub cors_origins: Vec<String>,
    /// Result-window size used when a request paginates without an explicit
    /// limit or size.
    pub default_limit: i64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_dir: PathBuf::from("logs"),
            cors_origins: Vec::new(),
            default_limit: 100,
        }
    }
}

impl ApiConfig {
    /// Create a new configuration with the specified bind address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            ..Self::default()
        }
    }

    /// Set the log directory.
    #[must_use]
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    /// Add a CORS allowed origin.
    #[must_use]
    pub fn with_cors_origin(mut self, origin: impl Into<String>) -> Self {
        self.cors_origins.push(origin.into());
        self
    }

    /// Set the default pagination limit.
    #[must_use]
    pub const fn with_default_limit(mut self, limit: i64) -> Self {
        self.default_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert!(config.cors_origins.is_empty());
        assert_eq!(config.default_limit, 100);
    }

    #[test]
    fn test_config_new() {
        let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 9000);
        let config = ApiConfig::new(addr);

        assert_eq!(config.bind_addr, addr);
        assert_eq!(config.default_limit, 100);
    }

    #[test]
    fn test_config_builder() {
        let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), 9000);
        let config = ApiConfig::new(addr)
            .with_log_dir("/var/log/app")
            .with_cors_origin("http://localhost:3000")
            .with_cors_origin("https://logs.example.com")
            .with_default_limit(25);

        assert_eq!(config.log_dir, PathBuf::from("/var/log/app"));
        assert_eq!(config.cors_origins.len(), 2);
        assert!(config.cors_origins.contains(&"http://localhost:3000".to_string()));
        assert_eq!(config.default_limit, 25);
    }
}
