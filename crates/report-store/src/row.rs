//! Decoding dynamically typed SQLite rows into [`Value`]s.

use sqlx::sqlite::SqliteRow;
use sqlx::{Column as _, ColumnIndex, Row, TypeInfo, ValueRef};

use crate::{Column, Value};

/// Decodes one cell using the runtime storage class of the value.
pub(crate) fn decode_value<I>(row: &SqliteRow, index: I) -> Result<Value, sqlx::Error>
where
    I: ColumnIndex<SqliteRow> + Copy,
{
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }

    let value = match raw.type_info().name() {
        "INTEGER" => Value::Integer(row.try_get(index)?),
        "REAL" => Value::Real(row.try_get(index)?),
        "BLOB" => Value::Blob(row.try_get(index)?),
        _ => Value::Text(row.try_get(index)?),
    };
    Ok(value)
}

/// Columns of a `SELECT *` row, in result order, kinds inferred from names.
pub(crate) fn inferred_columns(row: &SqliteRow) -> Vec<Column> {
    row.columns()
        .iter()
        .map(|c| Column::inferred(c.name()))
        .collect()
}

/// Decodes every cell of a row by position.
pub(crate) fn decode_positional(row: &SqliteRow) -> Result<Vec<Value>, sqlx::Error> {
    (0..row.len()).map(|idx| decode_value(row, idx)).collect()
}

/// Decodes the named cells of a row, in the given order.
pub(crate) fn decode_named(row: &SqliteRow, columns: &[Column]) -> Result<Vec<Value>, sqlx::Error> {
    columns
        .iter()
        .map(|c| decode_value(row, c.name.as_str()))
        .collect()
}
