//! Server configuration.
//!
//! This module defines HTTP server binding settings.

use std::net::SocketAddr;

use serde::Deserialize;

/// Server binding settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl ServerSettings {
    /// Converts the host and port to a `SocketAddr`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host is not an IP address.
    pub fn bind_address(&self) -> anyhow::Result<SocketAddr> {
        let ip = self
            .host
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid IP address '{}': {e}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
