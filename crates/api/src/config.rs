//! Application configuration loaded from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use report_store::StoreConfig;

/// Server configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `HOST` — bind address (default: `"0.0.0.0"`)
/// - `PORT` — listen port (default: `3000`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
/// - `DATABASE_PATH` — SQLite file (default: `"database.sqlite"`)
/// - `SCHEMA_PATH` — schema applied on first use (default: `"schema/schema.sql"`)
/// - `DB_MAX_CONNECTIONS` — pool size (default: `5`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub database_path: PathBuf,
    pub schema_path: PathBuf,
    pub max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            database_path: std::env::var_os("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            schema_path: std::env::var_os("SCHEMA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.schema_path),
            max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_connections),
        }
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Store settings derived from this configuration.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.database_path, &self.schema_path)
            .with_max_connections(self.max_connections)
            .with_acquire_timeout(Duration::from_secs(5))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            database_path: PathBuf::from("database.sqlite"),
            schema_path: PathBuf::from("schema/schema.sql"),
            max_connections: 5,
        }
    }
}
