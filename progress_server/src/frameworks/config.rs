use crate::interface_adapters::routes::normalize_prefix;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

// Runtime/server settings read from the environment.

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_PREFIX: &str = "/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    // Normalised: leading slash, no trailing slash, "" for the root.
    pub api_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            api_prefix: DEFAULT_PREFIX.to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Build from any key lookup; invalid values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let host = match lookup("PROGRESS_API_HOST") {
            Some(value) => value.parse().unwrap_or_else(|_| {
                tracing::warn!(%value, "invalid PROGRESS_API_HOST, using default");
                defaults.host
            }),
            None => defaults.host,
        };

        let port = match lookup("PROGRESS_API_PORT") {
            Some(value) => value.parse().unwrap_or_else(|_| {
                tracing::warn!(%value, "invalid PROGRESS_API_PORT, using default");
                defaults.port
            }),
            None => defaults.port,
        };

        let api_prefix = lookup("PROGRESS_API_PREFIX")
            .map(|value| normalize_prefix(&value))
            .unwrap_or(defaults.api_prefix);

        Self {
            host,
            port,
            api_prefix,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
