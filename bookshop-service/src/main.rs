use bookshop_service::routes::{build_router, Provider};
use bookshop_service::services::books_api::{build_client, HttpBooksRepository};
use bookshop_service::services::metrics::BooksCatalog;
use bookshop_service::utils::config::Config;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshop_service=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    if config.books_api_url.is_none() {
        warn!("BOOKS_API_URL not configured, the catalog will be served empty");
    }

    let client = build_client(&config)?;
    let repo = HttpBooksRepository::from_config(client, &config);
    let provider: Provider = Arc::new(BooksCatalog::new(Arc::new(repo)));

    let app = build_router(provider);

    let addr = config.listen_addr();
    info!("Bookshop service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
