//! Server configuration from environment variables

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid LOGAI_HOST '{0}': expected an IP address")]
    InvalidHost(String),

    #[error("invalid LOGAI_PORT '{0}': expected 0-65535")]
    InvalidPort(String),

    #[error("invalid LOGAI_SEED '{0}': expected an unsigned integer")]
    InvalidSeed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub host: IpAddr,
    pub port: u16,

    // fixed seed makes the mock store reproducible across restarts
    pub seed: Option<u64>,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset or blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host: IpAddr = match get("LOGAI_HOST") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidHost(raw))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port: u16 = match get("LOGAI_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let seed: Option<u64> = match get("LOGAI_SEED") {
            Some(raw) => Some(
                raw.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidSeed(raw))?,
            ),
            None => None,
        };

        Ok(Self { host, port, seed })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            seed: None,
        }
    }
}
