//! SQLite-backed store for the reporting service.
//!
//! - [`bootstrap`] opens the pool and applies the schema once per store
//! - [`query`] holds the fixed report shapes and their output contracts
//! - [`ReportStore`] is the read interface the HTTP layer depends on
//! - [`SqliteReportStore`] implements it over a `sqlx` SQLite pool

pub mod bootstrap;
pub mod config;
pub mod error;
pub mod query;
mod row;
pub mod sqlite;
pub mod store;

pub use bootstrap::{SCHEMA_VERSION, SchemaOutcome};
pub use common::{Column, ColumnKind, RowSet, TableName, Value};
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use query::{Report, ReportColumn};
pub use sqlite::SqliteReportStore;
pub use store::{ReportStore, ReportStoreExt};
