//! Row set to HTML table rendering.

use common::{Column, RowSet, Value};

use crate::{escape_html, format_money};

/// Rendered in place of a table when a row set has no rows.
pub const NO_DATA: &str = r#"<div class="pad">Sin datos.</div>"#;

/// Renders a row set as an HTML table.
///
/// Money columns are truncated to whole units and grouped; everything else,
/// headers included, is escaped. Rows must be aligned to the columns.
pub fn render_table(rows: &RowSet) -> String {
    if rows.is_empty() {
        return NO_DATA.to_string();
    }

    let mut html = String::from("<table>\n<thead>\n<tr>");
    for name in rows.column_names() {
        html.push_str("<th>");
        html.push_str(&escape_html(name));
        html.push_str("</th>");
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in rows.rows() {
        html.push_str("<tr>");
        for (column, value) in rows.columns().iter().zip(row) {
            push_cell(&mut html, column, value);
        }
        html.push_str("</tr>\n");
    }

    html.push_str("</tbody>\n</table>");
    html
}

fn push_cell(html: &mut String, column: &Column, value: &Value) {
    if column.is_money() {
        html.push_str(r#"<td class="money">"#);
        html.push_str(&format_money(value.as_money_units()));
    } else {
        html.push_str("<td>");
        html.push_str(&escape_html(&value.to_text()));
    }
    html.push_str("</td>");
}
