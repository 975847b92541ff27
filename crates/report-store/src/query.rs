//! The fixed report shapes.
//!
//! Each report declares its output columns and their kinds. The formatter keys
//! money rendering off these declarations, so the SQL aliases must match the
//! names listed here; a missing alias fails the query.

use crate::{Column, ColumnKind, TableName};

/// A declared output column of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportColumn {
    pub name: &'static str,
    pub kind: ColumnKind,
}

impl ReportColumn {
    pub const fn text(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Text,
        }
    }

    pub const fn money(name: &'static str) -> Self {
        Self {
            name,
            kind: ColumnKind::Money,
        }
    }
}

impl From<&ReportColumn> for Column {
    fn from(column: &ReportColumn) -> Self {
        Column::new(column.name, column.kind)
    }
}

/// A parameterless aggregate report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Report {
    /// Units and revenue per product, highest revenue first.
    SalesByProduct,
    /// Every `Televisor` order with its buyer, in order id order.
    FeaturedProductPurchases,
    /// Customers whose orders sum to more than 10,000,000, biggest first.
    HighValueCustomers,
}

const SALES_BY_PRODUCT_SQL: &str = "
    SELECT p.Name AS Producto, p.Reference AS Reference,
           SUM(o.Quantity) AS Cantidad, SUM(o.Total) AS Total
    FROM Orders o
    JOIN Product p ON o.ProductId = p.ProductId
    GROUP BY p.ProductId, p.Name, p.Reference
    ORDER BY Total DESC, p.ProductId ASC
";

const FEATURED_PRODUCT_SQL: &str = "
    SELECT p.Name AS Producto, c.Name AS Cliente, o.Quantity AS Cantidad, o.Total AS Total
    FROM Orders o
    JOIN Client c  ON o.ClientId  = c.ClientId
    JOIN Product p ON o.ProductId = p.ProductId
    WHERE p.Name = 'Televisor'
    ORDER BY o.OrderId ASC
";

const HIGH_VALUE_CUSTOMERS_SQL: &str = "
    SELECT c.ClientId AS ClientId, c.Name AS Name, c.LastName AS LastName,
           SUM(o.Total) AS TotalComprado
    FROM Orders o
    JOIN Client c ON o.ClientId = c.ClientId
    GROUP BY c.ClientId, c.Name, c.LastName
    HAVING SUM(o.Total) > 10000000
    ORDER BY TotalComprado DESC, c.ClientId ASC
";

const SALES_BY_PRODUCT_COLUMNS: &[ReportColumn] = &[
    ReportColumn::text("Producto"),
    ReportColumn::text("Reference"),
    ReportColumn::text("Cantidad"),
    ReportColumn::money("Total"),
];

const FEATURED_PRODUCT_COLUMNS: &[ReportColumn] = &[
    ReportColumn::text("Producto"),
    ReportColumn::text("Cliente"),
    ReportColumn::text("Cantidad"),
    ReportColumn::money("Total"),
];

const HIGH_VALUE_CUSTOMERS_COLUMNS: &[ReportColumn] = &[
    ReportColumn::text("ClientId"),
    ReportColumn::text("Name"),
    ReportColumn::text("LastName"),
    ReportColumn::money("TotalComprado"),
];

impl Report {
    pub const ALL: [Report; 3] = [
        Report::SalesByProduct,
        Report::FeaturedProductPurchases,
        Report::HighValueCustomers,
    ];

    /// Stable identifier used in logs and metric labels.
    pub fn name(&self) -> &'static str {
        match self {
            Report::SalesByProduct => "sales_by_product",
            Report::FeaturedProductPurchases => "featured_product_purchases",
            Report::HighValueCustomers => "high_value_customers",
        }
    }

    pub fn sql(&self) -> &'static str {
        match self {
            Report::SalesByProduct => SALES_BY_PRODUCT_SQL,
            Report::FeaturedProductPurchases => FEATURED_PRODUCT_SQL,
            Report::HighValueCustomers => HIGH_VALUE_CUSTOMERS_SQL,
        }
    }

    /// The declared output contract, in column order.
    pub fn columns(&self) -> &'static [ReportColumn] {
        match self {
            Report::SalesByProduct => SALES_BY_PRODUCT_COLUMNS,
            Report::FeaturedProductPurchases => FEATURED_PRODUCT_COLUMNS,
            Report::HighValueCustomers => HIGH_VALUE_CUSTOMERS_COLUMNS,
        }
    }

    pub(crate) fn output_columns(&self) -> Vec<Column> {
        self.columns().iter().map(Column::from).collect()
    }
}

/// SQL dumping a whitelisted table. Only the validated identifier is interpolated.
pub fn table_dump_sql(table: TableName) -> String {
    format!("SELECT * FROM {}", table.as_str())
}
