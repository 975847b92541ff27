//! Shared types for the reporting service.
//!
//! - [`TableName`] is the closed whitelist of tables that may be dumped by name.
//! - [`RowSet`] is the rectangular result every report query produces and the
//!   formatter consumes.

pub mod error;
pub mod table;
pub mod types;

pub use error::TableRejected;
pub use table::TableName;
pub use types::{Column, ColumnKind, MONEY_COLUMNS, RowSet, Value};
