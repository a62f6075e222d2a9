pub mod books;
pub mod docs;
pub mod health;

use crate::services::metrics::BooksProvider;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub type Provider = Arc<dyn BooksProvider + Send + Sync>;

pub fn build_router(provider: Provider) -> Router {
    Router::new()
        .route("/status", get(health::health_check))
        .route("/books", get(books::get_books))
        .route("/books/metrics", get(books::get_metrics))
        .merge(SwaggerUi::new("/swagger").url(docs::OPENAPI_PATH, docs::ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(provider)
}
