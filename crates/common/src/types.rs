use std::borrow::Cow;

/// Column names rendered as money when no explicit contract is declared.
pub const MONEY_COLUMNS: [&str; 3] = ["Total", "TotalVentas", "TotalComprado"];

/// Semantic kind of an output column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnKind {
    #[default]
    Text,
    Money,
}

impl ColumnKind {
    /// Infers the kind from a column name. Matching is case-sensitive.
    ///
    /// Only used for `SELECT *` dumps; report queries declare their kinds.
    pub fn infer(name: &str) -> Self {
        if MONEY_COLUMNS.contains(&name) {
            ColumnKind::Money
        } else {
            ColumnKind::Text
        }
    }
}

/// A named output column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Creates a column whose kind is inferred from its name.
    pub fn inferred(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = ColumnKind::infer(&name);
        Self { name, kind }
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Text)
    }

    pub fn money(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Money)
    }

    pub fn is_money(&self) -> bool {
        self.kind == ColumnKind::Money
    }
}

/// A single cell, mirroring SQLite's storage classes.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// Returns the value as whole currency units, truncated toward zero.
    ///
    /// Non-numeric values coerce to zero.
    pub fn as_money_units(&self) -> i64 {
        match self {
            Value::Integer(n) => *n,
            Value::Real(f) => f.trunc() as i64,
            Value::Text(s) => s.trim().parse::<f64>().map_or(0, |f| f.trunc() as i64),
            Value::Null | Value::Blob(_) => 0,
        }
    }

    /// Returns the plain (unescaped) text form of the value.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Value::Null => Cow::Borrowed(""),
            Value::Integer(n) => Cow::Owned(n.to_string()),
            Value::Real(f) => Cow::Owned(f.to_string()),
            Value::Text(s) => Cow::Borrowed(s),
            Value::Blob(bytes) => String::from_utf8_lossy(bytes),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Real(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// An ordered set of columns and the rows aligned to them.
///
/// Every row must hold exactly one value per column, in column order.
/// [`RowSet::push_row`] checks this in debug builds only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowSet {
    columns: Vec<Column>,
    rows: Vec<Vec<Value>>,
}

impl RowSet {
    /// Creates an empty row set with the given columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Creates a row set with no columns and no rows.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn push_row(&mut self, row: Vec<Value>) {
        debug_assert_eq!(
            row.len(),
            self.columns.len(),
            "row width must match column count"
        );
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// A row set is empty when it has no rows, regardless of its columns.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}
