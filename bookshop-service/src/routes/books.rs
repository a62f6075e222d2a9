use crate::error::ApiError;
use crate::models::book::Book;
use crate::models::responses::{BooksMetrics, ErrorResponse};
use crate::routes::Provider;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::IntoParams;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MetricsParams {
    /// Author to count books for; exact, case-sensitive match.
    #[serde(default)]
    #[param(required = false)]
    pub author: String,
}

#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Current catalog, empty when the upstream is unavailable", body = [Book])
    )
)]
pub async fn get_books(State(provider): State<Provider>) -> Json<Vec<Book>> {
    Json(provider.get_books().await)
}

#[utoipa::path(
    get,
    path = "/books/metrics",
    tag = "books",
    params(MetricsParams),
    responses(
        (status = 200, description = "Metrics over the current catalog", body = BooksMetrics),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse),
        (status = 500, description = "Failed to get metrics", body = ErrorResponse)
    )
)]
pub async fn get_metrics(
    State(provider): State<Provider>,
    params: Result<Query<MetricsParams>, QueryRejection>,
) -> Result<Json<BooksMetrics>, ApiError> {
    let Query(params) = params.map_err(|e| {
        warn!("Rejected metrics query: {}", e);
        ApiError::from(e)
    })?;
    info!("Metrics query: {:?}", params);

    match provider.get_metrics(&params.author).await {
        Ok(metrics) => Ok(Json(metrics)),
        Err(e) => {
            error!("Failed to compute metrics for author '{}': {}", params.author, e);
            Err(e.into())
        }
    }
}
