//! Server configuration read from the environment.

use std::{env, net::SocketAddr};

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TODO_PORT must be a port number, got {0:?}")]
    InvalidPort(String),

    #[error("{host}:{port} is not a valid socket address")]
    InvalidAddr { host: String, port: u16 },
}

/// Bind settings for the HTTP server.
///
/// | Variable    | Default     |
/// |-------------|-------------|
/// | `TODO_HOST` | `127.0.0.1` |
/// | `TODO_PORT` | `3000`      |
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
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var("TODO_HOST").ok(), env::var("TODO_PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let port = match port {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ConfigError::InvalidAddr {
                host: self.host.clone(),
                port: self.port,
            })
    }
}
