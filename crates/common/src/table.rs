//! Whitelist of tables that may be dumped by name.

use std::fmt;
use std::str::FromStr;

use crate::TableRejected;

/// A table that passed the whitelist check.
///
/// Only values of this type are ever interpolated into SQL text; identifiers
/// cannot be bound as query parameters. Adding a table means adding a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableName {
    Client,
    Product,
    Orders,
}

impl TableName {
    /// Every whitelisted table, in display order.
    pub const ALL: [TableName; 3] = [TableName::Client, TableName::Product, TableName::Orders];

    /// Checks `name` against the whitelist. Comparison is case-sensitive.
    pub fn validate(name: &str) -> Result<Self, TableRejected> {
        match name {
            "Client" => Ok(TableName::Client),
            "Product" => Ok(TableName::Product),
            "Orders" => Ok(TableName::Orders),
            other => Err(TableRejected::new(other)),
        }
    }

    /// Returns the identifier as stored in the schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            TableName::Client => "Client",
            TableName::Product => "Product",
            TableName::Orders => "Orders",
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableName {
    type Err = TableRejected;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::validate(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_whitelisted_table() {
        for table in TableName::ALL {
            assert_eq!(TableName::validate(table.as_str()), Ok(table));
        }
    }

    #[test]
    fn rejects_injection_attempts() {
        for name in [
            "Client; DROP TABLE Orders",
            "Orders--",
            "Client WHERE 1=1",
            "\"Client\"",
            "sqlite_master",
        ] {
            let err = TableName::validate(name).unwrap_err();
            assert_eq!(err.name, name);
        }
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert!(TableName::validate("client").is_err());
        assert!(TableName::validate("ORDERS").is_err());
        assert!(TableName::validate(" Product").is_err());
        assert!(TableName::validate("").is_err());
    }

    #[test]
    fn parses_via_from_str() {
        let table: TableName = "Product".parse().unwrap();
        assert_eq!(table, TableName::Product);
        assert_eq!(table.to_string(), "Product");
    }
}
