use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use sqlx::Sqlite;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::SqlitePool;
use tokio::sync::OnceCell;

use crate::bootstrap::{self, SchemaOutcome};
use crate::query::table_dump_sql;
use crate::row::{decode_named, decode_positional, inferred_columns};
use crate::store::ReportStore;
use crate::{Report, Result, RowSet, StoreConfig, StoreError, TableName};

/// SQLite-backed report store.
///
/// The schema is applied lazily on the first [`acquire`](Self::acquire); later
/// calls on the same store skip the check entirely.
#[derive(Clone)]
pub struct SqliteReportStore {
    pool: SqlitePool,
    config: Arc<StoreConfig>,
    initialized: Arc<OnceCell<SchemaOutcome>>,
}

impl SqliteReportStore {
    /// Opens the database file, creating it if absent. Does not touch the schema.
    pub async fn connect(config: StoreConfig) -> Result<Self> {
        let pool = bootstrap::open_pool(&config).await?;
        Ok(Self {
            pool,
            config: Arc::new(config),
            initialized: Arc::new(OnceCell::new()),
        })
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Applies the schema if needed and returns what happened the first time.
    pub async fn ensure_initialized(&self) -> Result<SchemaOutcome> {
        self.initialized
            .get_or_try_init(|| bootstrap::ensure_schema(&self.pool, &self.config))
            .await
            .copied()
    }

    /// Returns a ready connection, initializing the schema on first use.
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>> {
        self.ensure_initialized().await?;
        self.pool
            .acquire()
            .await
            .map_err(|source| StoreError::Unavailable {
                path: self.config.database_path().to_path_buf(),
                source,
            })
    }

    /// Closes the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ReportStore for SqliteReportStore {
    #[tracing::instrument(skip(self))]
    async fn table(&self, table: TableName) -> Result<RowSet> {
        let mut conn = self.acquire().await?;
        let sql = table_dump_sql(table);
        let mut rows = sqlx::query(&sql).fetch(&mut *conn);

        let mut set = RowSet::empty();
        while let Some(row) = rows.try_next().await? {
            if set.columns().is_empty() {
                set = RowSet::new(inferred_columns(&row));
            }
            set.push_row(decode_positional(&row)?);
        }

        tracing::debug!(rows = set.len(), "table dumped");
        Ok(set)
    }

    #[tracing::instrument(skip(self))]
    async fn report(&self, report: Report) -> Result<RowSet> {
        let mut conn = self.acquire().await?;
        let started = Instant::now();

        let mut set = RowSet::new(report.output_columns());
        let mut rows = sqlx::query(report.sql()).fetch(&mut *conn);
        while let Some(row) = rows.try_next().await? {
            let values = decode_named(&row, set.columns())?;
            set.push_row(values);
        }

        metrics::histogram!("report_query_duration_seconds", "report" => report.name())
            .record(started.elapsed().as_secs_f64());
        tracing::debug!(rows = set.len(), "report executed");
        Ok(set)
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.acquire().await?;
        sqlx::query("SELECT 1").execute(&mut *conn).await?;
        Ok(())
    }
}
