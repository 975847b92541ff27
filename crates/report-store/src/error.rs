use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading from the report store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened or a connection could not be acquired.
    #[error("Store unavailable at {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },

    /// The schema resource could not be read during first initialization.
    #[error("Schema resource unavailable at {}: {source}", path.display())]
    SchemaMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A schema statement failed. `index` is 1-based.
    #[error("Schema initialization failed at statement {index}: {source}")]
    SchemaInitFailed {
        index: usize,
        statement: String,
        #[source]
        source: sqlx::Error,
    },

    /// A report or table query failed.
    #[error("Query failed: {0}")]
    QueryFailed(#[from] sqlx::Error),
}

impl StoreError {
    /// Returns true for the store-unavailable class: unreachable database or
    /// missing schema resource.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            StoreError::Unavailable { .. } | StoreError::SchemaMissing { .. }
        )
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
