//! Opening the SQLite pool and applying the schema on first use.
//!
//! Initialization is tracked by a marker row in `schema_version` rather than by
//! the size or existence of the database file. The check-then-create sequence
//! runs under a process-wide lock and inside a `BEGIN IMMEDIATE` transaction,
//! so concurrent callers in this process queue on the lock and other processes
//! sharing the file queue on SQLite's write lock.

use std::path::Path;

use sqlx::{Connection, SqliteConnection};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tokio::sync::Mutex;

use crate::{Result, StoreConfig, StoreError, TableName};

/// Version recorded in `schema_version` once the schema has been applied.
pub const SCHEMA_VERSION: i64 = 1;

static BOOTSTRAP_LOCK: Mutex<()> = Mutex::const_new(());

/// What [`ensure_schema`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaOutcome {
    /// The marker was already present; nothing ran.
    AlreadyInitialized,
    /// The tables existed without a marker; the marker was written.
    Adopted,
    /// The schema resource ran. Holds the number of statements executed.
    Initialized { statements: usize },
}

/// Connection options applied to every pooled connection.
pub fn connect_options(config: &StoreConfig) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(config.database_path())
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
}

/// Opens the pool. Fails with [`StoreError::Unavailable`] if the file cannot be
/// opened or created.
#[tracing::instrument(skip(config), fields(path = %config.database_path().display()))]
pub async fn open_pool(config: &StoreConfig) -> Result<SqlitePool> {
    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(connect_options(config))
        .await
        .map_err(|source| StoreError::Unavailable {
            path: config.database_path().to_path_buf(),
            source,
        })
}

/// Splits a schema resource into executable statements.
///
/// Statements are `;`-delimited. Blank chunks and chunks holding only `--`
/// comments are dropped. Semicolons inside string literals or trigger bodies
/// are not supported.
pub fn split_statements(schema: &str) -> impl Iterator<Item = &str> {
    schema.split(';').map(str::trim).filter(|chunk| {
        chunk
            .lines()
            .map(str::trim)
            .any(|line| !line.is_empty() && !line.starts_with("--"))
    })
}

/// Applies the schema if the store has not been initialized yet.
#[tracing::instrument(skip(pool, config), fields(schema = %config.schema_path().display()))]
pub async fn ensure_schema(pool: &SqlitePool, config: &StoreConfig) -> Result<SchemaOutcome> {
    let _guard = BOOTSTRAP_LOCK.lock().await;

    let mut conn = pool
        .acquire()
        .await
        .map_err(|source| StoreError::Unavailable {
            path: config.database_path().to_path_buf(),
            source,
        })?;

    // Dropping the transaction rolls it back, including when this future is
    // cancelled mid-initialization.
    let mut tx = conn.begin_with("BEGIN IMMEDIATE").await?;

    let outcome = match initialize(&mut *tx, config.schema_path()).await {
        Ok(outcome) => {
            tx.commit().await?;
            outcome
        }
        Err(err) => {
            if let Err(rollback) = tx.rollback().await {
                tracing::error!(error = %rollback, "rollback after failed initialization failed");
            }
            tracing::error!(error = %err, "schema initialization failed");
            return Err(err);
        }
    };

    match outcome {
        SchemaOutcome::Initialized { statements } => {
            metrics::counter!("schema_initializations_total").increment(1);
            tracing::info!(statements, "schema initialized");
        }
        SchemaOutcome::Adopted => {
            tracing::warn!("existing tables adopted without a schema marker");
        }
        SchemaOutcome::AlreadyInitialized => {
            tracing::debug!("schema already initialized");
        }
    }
    Ok(outcome)
}

async fn initialize(conn: &mut SqliteConnection, schema_path: &Path) -> Result<SchemaOutcome> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version    INTEGER NOT NULL,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(&mut *conn)
    .await?;

    let current: Option<i64> = sqlx::query_scalar("SELECT MAX(version) FROM schema_version")
        .fetch_one(&mut *conn)
        .await?;
    if current.is_some_and(|v| v >= SCHEMA_VERSION) {
        return Ok(SchemaOutcome::AlreadyInitialized);
    }

    let existing: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('Client', 'Product', 'Orders')",
    )
    .fetch_one(&mut *conn)
    .await?;
    if existing == TableName::ALL.len() as i64 {
        record_version(conn).await?;
        return Ok(SchemaOutcome::Adopted);
    }

    let schema = tokio::fs::read_to_string(schema_path)
        .await
        .map_err(|source| StoreError::SchemaMissing {
            path: schema_path.to_path_buf(),
            source,
        })?;

    let mut statements = 0;
    for (idx, statement) in split_statements(&schema).enumerate() {
        sqlx::query(statement)
            .persistent(false)
            .execute(&mut *conn)
            .await
            .map_err(|source| StoreError::SchemaInitFailed {
                index: idx + 1,
                statement: statement.to_string(),
                source,
            })?;
        statements += 1;
    }

    record_version(conn).await?;
    Ok(SchemaOutcome::Initialized { statements })
}

async fn record_version(conn: &mut SqliteConnection) -> Result<()> {
    sqlx::query("INSERT INTO schema_version (version) VALUES (?)")
        .bind(SCHEMA_VERSION)
        .execute(&mut *conn)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_drops_blank_and_comment_only_chunks() {
        let schema = "-- header\nCREATE TABLE a (x INTEGER);\n\n  ;\nCREATE TABLE b (y TEXT) ;\n-- trailing note\n";
        let statements: Vec<_> = split_statements(schema).collect();
        assert_eq!(
            statements,
            vec![
                "-- header\nCREATE TABLE a (x INTEGER)",
                "CREATE TABLE b (y TEXT)"
            ]
        );
    }

    #[test]
    fn split_of_empty_schema_yields_nothing() {
        assert_eq!(split_statements("").count(), 0);
        assert_eq!(split_statements(" ; ;\n;").count(), 0);
    }

    #[test]
    fn shipped_schema_splits_into_five_statements() {
        let schema = include_str!("../../../schema/schema.sql");
        assert_eq!(split_statements(schema).count(), 5);
    }
}
