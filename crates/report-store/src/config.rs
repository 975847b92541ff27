//! Store configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where the database lives and how the pool is sized.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub database_path: PathBuf,
    pub schema_path: PathBuf,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl StoreConfig {
    /// Creates a config with default pool settings.
    pub fn new(database_path: impl Into<PathBuf>, schema_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            schema_path: schema_path.into(),
            ..Self::default()
        }
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    pub fn schema_path(&self) -> &Path {
        &self.schema_path
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("database.sqlite"),
            schema_path: PathBuf::from("schema/schema.sql"),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = StoreConfig::default();
        assert_eq!(config.database_path(), Path::new("database.sqlite"));
        assert_eq!(config.schema_path(), Path::new("schema/schema.sql"));
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(5));
    }

    #[test]
    fn builder_overrides() {
        let config = StoreConfig::new("/tmp/x.sqlite", "/tmp/schema.sql")
            .with_max_connections(2)
            .with_acquire_timeout(Duration::from_millis(250));
        assert_eq!(config.database_path(), Path::new("/tmp/x.sqlite"));
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.acquire_timeout, Duration::from_millis(250));
    }
}
