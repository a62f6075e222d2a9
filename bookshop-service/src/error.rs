use crate::models::responses::ErrorResponse;
use crate::services::metrics::ProviderError;
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Errors surfaced to HTTP clients. The `Display` text is the client-facing
/// message; the wrapped cause is only logged.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid query parameters")]
    InvalidQuery(#[from] QueryRejection),
    #[error("Failed to get metrics")]
    Metrics(#[from] ProviderError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::Metrics(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (self.status(), body).into_response()
    }
}
