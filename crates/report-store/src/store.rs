use async_trait::async_trait;

use crate::{Report, Result, RowSet, TableName};

/// Read interface over the reporting dataset.
///
/// Implementations must be thread-safe (Send + Sync). Every call returns a
/// fresh [`RowSet`]; nothing is cached.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Returns every row of a whitelisted table in store order.
    async fn table(&self, table: TableName) -> Result<RowSet>;

    /// Runs one of the fixed aggregate reports.
    async fn report(&self, report: Report) -> Result<RowSet>;

    /// Checks that the store is reachable and initialized.
    async fn ping(&self) -> Result<()>;
}

/// Convenience methods for report stores.
#[async_trait]
pub trait ReportStoreExt: ReportStore {
    /// Dumps every whitelisted table, in [`TableName::ALL`] order.
    async fn all_tables(&self) -> Result<Vec<(TableName, RowSet)>> {
        let mut dumps = Vec::with_capacity(TableName::ALL.len());
        for table in TableName::ALL {
            dumps.push((table, self.table(table).await?));
        }
        Ok(dumps)
    }
}

// Blanket implementation for all ReportStore implementations
impl<T: ReportStore + ?Sized> ReportStoreExt for T {}
