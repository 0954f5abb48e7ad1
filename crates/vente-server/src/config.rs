// ABOUTME: Configuration loading for the vente server.
// ABOUTME: Reads the database path and bind address from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_DATABASE: &str = "articledb.sqlite";
const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("VENTE_BIND is not a valid socket address: {0}")]
    InvalidBind(String),
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct VenteConfig {
    pub database: PathBuf,
    pub bind: SocketAddr,
}

impl VenteConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// Environment variables:
    /// - VENTE_DATABASE: SQLite database file (default: articledb.sqlite)
    /// - VENTE_BIND: socket address to bind (default: 127.0.0.1:5000)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database = lookup("VENTE_DATABASE")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));

        let bind_str = lookup("VENTE_BIND")
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind: SocketAddr = bind_str
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_str))?;

        Ok(Self { database, bind })
    }
}
