//! Page builders for each view.

use common::{RowSet, TableName};
use report_store::Report;

use crate::{Page, render_table};

/// Title and optional subtitle of a report page.
pub fn report_heading(report: Report) -> (&'static str, Option<&'static str>) {
    match report {
        Report::SalesByProduct => (
            "Reporte total de ventas por producto",
            Some("Ordenado de mayor a menor por Total."),
        ),
        Report::FeaturedProductPurchases => (
            "Compras de televisores",
            Some("Detalle por cliente del producto Televisor."),
        ),
        Report::HighValueCustomers => ("Clientes con compras mayores a 10 millones", None),
    }
}

/// Every whitelisted table, each followed by a link to its own page.
pub fn tables_page(dumps: &[(TableName, RowSet)]) -> Page {
    let mut body = String::new();
    for (table, rows) in dumps {
        body.push_str(&format!(r#"<div class="pad"><strong>{table}</strong></div>"#));
        body.push_str(&render_table(rows));
        body.push_str(&format!(
            r#"<div class="pad"><a href="/tabla/{table}">Ver solo {table}</a></div>"#
        ));
    }
    Page::new("Tablas base", body).with_subtitle("Visualiza Client, Product y Orders.")
}

pub fn table_page(table: TableName, rows: &RowSet) -> Page {
    Page::new(format!("Tabla: {table}"), render_table(rows))
}

pub fn report_page(report: Report, rows: &RowSet) -> Page {
    let (title, subtitle) = report_heading(report);
    let page = Page::new(title, render_table(rows));
    match subtitle {
        Some(subtitle) => page.with_subtitle(subtitle),
        None => page,
    }
}

/// Shown with a 400 when a table name fails the whitelist.
pub fn rejected_table_page() -> Page {
    Page::new(
        "Tabla no permitida",
        r#"<div class="pad">Tabla inválida.</div>"#,
    )
}

/// Generic failure page. Never carries error details.
pub fn error_page() -> Page {
    Page::new(
        "Error interno",
        r#"<div class="pad">No fue posible generar la página.</div>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NO_DATA;
    use common::{Column, Value};

    fn row_set(columns: Vec<Column>, rows: Vec<Vec<Value>>) -> RowSet {
        let mut set = RowSet::new(columns);
        for row in rows {
            set.push_row(row);
        }
        set
    }

    #[test]
    fn tables_page_lists_each_table_with_link() {
        let clients = row_set(vec![Column::inferred("Name")], vec![vec!["Ana".into()]]);
        let dumps = vec![
            (TableName::Client, clients),
            (TableName::Product, RowSet::empty()),
            (TableName::Orders, RowSet::empty()),
        ];
        let page = tables_page(&dumps);

        assert_eq!(page.title, "Tablas base");
        for table in TableName::ALL {
            assert!(page.body.contains(&format!("<strong>{table}</strong>")));
            assert!(page.body.contains(&format!(
                r#"<a href="/tabla/{table}">Ver solo {table}</a>"#
            )));
        }
        assert!(page.body.contains("<td>Ana</td>"));
        assert_eq!(page.body.matches(NO_DATA).count(), 2);
    }

    #[test]
    fn report_pages_use_their_headings() {
        let rows = row_set(
            vec![Column::money("TotalComprado")],
            vec![vec![Value::Integer(10_000_001)]],
        );
        let page = report_page(Report::HighValueCustomers, &rows);
        assert_eq!(page.title, "Clientes con compras mayores a 10 millones");
        assert_eq!(page.subtitle, None);
        assert!(page.body.contains("10.000.001"));

        let page = report_page(Report::SalesByProduct, &RowSet::empty());
        assert_eq!(page.subtitle.as_deref(), Some("Ordenado de mayor a menor por Total."));
        assert_eq!(page.body, NO_DATA);
    }

    #[test]
    fn every_report_renders_marker_when_empty() {
        for report in Report::ALL {
            let page = report_page(report, &RowSet::empty());
            assert_eq!(page.body, NO_DATA);
        }
    }

    #[test]
    fn table_page_title_names_the_table() {
        let page = table_page(TableName::Orders, &RowSet::empty());
        assert_eq!(page.title, "Tabla: Orders");
    }
}
