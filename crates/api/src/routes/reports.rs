//! Table dumps and report pages.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri, header};
use axum::response::{Html, IntoResponse};
use common::TableName;
use report_store::{Report, ReportStore, ReportStoreExt};
use reports::pages;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: ReportStore> {
    pub store: S,
}

impl<S: ReportStore> AppState<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

/// GET / — redirect to the table overview.
pub async fn home() -> impl IntoResponse {
    (StatusCode::FOUND, [(header::LOCATION, "/tablas")])
}

/// GET /tablas — dump every whitelisted table.
#[tracing::instrument(skip(state))]
pub async fn tables<S: ReportStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    uri: Uri,
) -> Result<Html<String>, ApiError> {
    let dumps = state.store.all_tables().await?;
    metrics::counter!("reports_rendered_total", "view" => "tables").increment(1);
    Ok(Html(pages::tables_page(&dumps).render(uri.path())))
}

/// GET /tabla/{name} — dump one table, if it is on the whitelist.
#[tracing::instrument(skip(state))]
pub async fn table<S: ReportStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(name): Path<String>,
    uri: Uri,
) -> Result<Html<String>, ApiError> {
    let table = TableName::validate(&name)?;
    let rows = state.store.table(table).await?;
    metrics::counter!("reports_rendered_total", "view" => "table").increment(1);
    Ok(Html(pages::table_page(table, &rows).render(uri.path())))
}

/// GET /reporte — sales by product.
pub async fn sales_by_product<S: ReportStore + 'static>(
    state: State<Arc<AppState<S>>>,
    uri: Uri,
) -> Result<Html<String>, ApiError> {
    render_report(state, Report::SalesByProduct, uri).await
}

/// GET /reporte-televisores — purchases of the featured product.
pub async fn featured_product<S: ReportStore + 'static>(
    state: State<Arc<AppState<S>>>,
    uri: Uri,
) -> Result<Html<String>, ApiError> {
    render_report(state, Report::FeaturedProductPurchases, uri).await
}

/// GET /reporte-clientes-10m — customers above the spending threshold.
pub async fn high_value_customers<S: ReportStore + 'static>(
    state: State<Arc<AppState<S>>>,
    uri: Uri,
) -> Result<Html<String>, ApiError> {
    render_report(state, Report::HighValueCustomers, uri).await
}

#[tracing::instrument(skip_all, fields(report = report.name()))]
async fn render_report<S: ReportStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    report: Report,
    uri: Uri,
) -> Result<Html<String>, ApiError> {
    let rows = state.store.report(report).await?;
    metrics::counter!("reports_rendered_total", "view" => report.name()).increment(1);
    tracing::debug!(rows = rows.len(), "report rendered");
    Ok(Html(pages::report_page(report, &rows).render(uri.path())))
}
