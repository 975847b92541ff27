//! HTTP server for the reporting views.
//!
//! Serves HTML table dumps and the fixed aggregate reports, with structured
//! logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::http::Method;
use axum::routing::get;
use metrics_exporter_prometheus::PrometheusHandle;
use report_store::ReportStore;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::reports::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: ReportStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::render))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::reports::home))
        .route("/health", get(routes::health::check::<S>))
        .route("/tablas", get(routes::reports::tables::<S>))
        .route("/tabla/{name}", get(routes::reports::table::<S>))
        .route("/reporte", get(routes::reports::sales_by_product::<S>))
        .route(
            "/reporte-televisores",
            get(routes::reports::featured_product::<S>),
        )
        .route(
            "/reporte-clientes-10m",
            get(routes::reports::high_value_customers::<S>),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET]),
        )
        .layer(TraceLayer::new_for_http())
}

/// Wraps a store in shared application state.
pub fn create_state<S: ReportStore + 'static>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState::new(store))
}
