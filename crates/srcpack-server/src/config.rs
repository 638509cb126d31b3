//! Server configuration.
//!
//! Loaded from environment variables with local-development defaults:
//!
//! - `SRCPACK_HOST`: bind address (default `0.0.0.0`)
//! - `SRCPACK_PORT`: bind port (default `8080`)
//! - `SRCPACK_PROJECT_DIR`: project directory the standard layout is
//!   rebased under (default `/app`)

use std::net::SocketAddr;

use anyhow::Context;
use anyhow::Result;

/// Runtime configuration for the server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,

    /// Bind port.
    pub port: u16,

    /// Project directory the bundle layout is rooted under.
    pub project_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            project_dir: srcpack_core::config::DEFAULT_PROJECT_DIR.to_string(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `SRCPACK_PORT` is set but not a valid port
    /// number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let host = std::env::var("SRCPACK_HOST").unwrap_or(defaults.host);
        let port = match std::env::var("SRCPACK_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid SRCPACK_PORT: {raw}"))?,
            Err(_) => defaults.port,
        };
        let project_dir = std::env::var("SRCPACK_PROJECT_DIR").unwrap_or(defaults.project_dir);

        Ok(Self {
            host,
            port,
            project_dir,
        })
    }

    /// Returns the socket address to bind.
    ///
    /// # Errors
    ///
    /// Returns an error if the host string does not parse as an IP address.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .host
            .parse::<std::net::IpAddr>()
            .with_context(|| format!("invalid bind host: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.project_dir, "/app");
    }

    #[test]
    fn test_bind_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            ..ServerConfig::default()
        };
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn test_bind_addr_invalid_host() {
        let config = ServerConfig {
            host: "not-an-ip".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.bind_addr().is_err());
    }
}
