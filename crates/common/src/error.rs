use thiserror::Error;

/// A caller-supplied table name that is not on the whitelist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("table not allowed: {name:?}")]
pub struct TableRejected {
    pub name: String,
}

impl TableRejected {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
