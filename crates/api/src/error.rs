//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use common::TableRejected;
use report_store::StoreError;
use reports::pages;
use thiserror::Error;

/// API-level error type that maps to HTML error pages.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested table is not on the whitelist.
    #[error(transparent)]
    InvalidTable(#[from] TableRejected),

    /// The store could not be opened, initialized, or queried.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, page) = match &self {
            ApiError::InvalidTable(rejected) => {
                metrics::counter!("table_requests_rejected_total").increment(1);
                tracing::info!(table = %rejected.name, "rejected table outside whitelist");
                (StatusCode::BAD_REQUEST, pages::rejected_table_page())
            }
            ApiError::Store(err) => {
                tracing::error!(
                    error = %err,
                    unavailable = err.is_unavailable(),
                    "store failure while rendering page"
                );
                (StatusCode::INTERNAL_SERVER_ERROR, pages::error_page())
            }
        };

        (status, Html(page.render(""))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_table_maps_to_bad_request() {
        let response = ApiError::from(TableRejected::new("Users")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_failure_maps_to_internal_error() {
        let err = StoreError::QueryFailed(sqlx::Error::RowNotFound);
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
