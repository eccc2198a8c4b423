//! Configuration management for the MCP server.
//!
//! Values come from defaults, overridden by environment variables (a `.env`
//! file is loaded first when present).

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Environment variable selecting the SQLite file.
pub const DB_PATH_ENV: &str = "DB_PATH";

/// SQLite file used when `DB_PATH` is unset.
pub const DEFAULT_DB_PATH: &str = "test.db";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Product store configuration.
    pub store: StoreConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Product store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path of the SQLite database file.
    pub path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "Demo".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            store: StoreConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`, ...); the database path is read
    /// from `DB_PATH`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        match std::env::var(DB_PATH_ENV) {
            Ok(path) if !path.is_empty() => {
                config.store.path = PathBuf::from(path);
                info!("Database path loaded from environment");
            }
            _ => info!("{} not set, using {}", DB_PATH_ENV, DEFAULT_DB_PATH),
        }

        config.transport = TransportConfig::from_env();

        config
    }
}
