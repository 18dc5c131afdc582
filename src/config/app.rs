//! Application configuration loading from config.toml
//!
//! Settings come from an optional TOML file (`config.toml`, or the path in
//! `SHOP_CONFIG`) and may be overridden by `DATABASE_URL` and `BIND_ADDRESS`.
//! Every field has a default, so the server starts with no configuration at all.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{net::SocketAddr, path::Path};

/// Default `SQLite` store; `mode=rwc` creates the file when it is absent.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://shop.db?mode=rwc";
/// Default listen address for the HTTP server
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";
/// Config file used when `SHOP_CONFIG` is not set
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// `SeaORM` connection URL
    pub database_url: String,
    /// `host:port` the HTTP server listens on
    pub bind_address: String,
    /// Log every SQL statement executed by the connection pool
    pub sql_logging: bool,
    /// Insert the sample dataset into an empty store at startup
    pub seed: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            sql_logging: true,
            seed: true,
        }
    }
}

impl AppConfig {
    /// Applies `DATABASE_URL` and `BIND_ADDRESS` from `lookup` on top of the file values.
    #[must_use]
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(addr) = lookup("BIND_ADDRESS") {
            self.bind_address = addr;
        }
        self
    }

    /// Parses the configured bind address.
    ///
    /// # Errors
    /// Returns `Error::Config` if `bind_address` is not a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address.parse().map_err(|e| Error::Config {
            message: format!("Invalid bind address {:?}: {e}", self.bind_address),
        })
    }
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse TOML from config file {path_ref:?}: {e}"),
    })
}

/// Loads the full application configuration.
///
/// An explicit `SHOP_CONFIG` path must exist; the default `config.toml` is optional.
/// Environment overrides are applied last.
pub fn load_app_configuration() -> Result<AppConfig> {
    let config = match std::env::var("SHOP_CONFIG") {
        Ok(path) => load_config(path)?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(DEFAULT_CONFIG_PATH)?,
        Err(_) => {
            tracing::info!("No {DEFAULT_CONFIG_PATH} found, using built-in defaults.");
            AppConfig::default()
        }
    };

    Ok(config.with_overrides(|key| std::env::var(key).ok()))
}
