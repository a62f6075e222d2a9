use crate::models::book::Book;
use crate::models::responses::BooksMetrics;
use crate::services::books_api::{BooksRepository, FetchError};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("metrics unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait BooksProvider {
    async fn get_books(&self) -> Vec<Book>;
    async fn get_metrics(&self, author: &str) -> Result<BooksMetrics, ProviderError>;
}

type Repository = Arc<dyn BooksRepository + Send + Sync>;

/// Serves the catalog and its metrics from one upstream fetch per call.
pub struct BooksCatalog {
    repo: Repository,
}

impl BooksCatalog {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl BooksProvider for BooksCatalog {
    async fn get_books(&self) -> Vec<Book> {
        snapshot_or_empty(self.repo.get_books().await)
    }

    /// Never fails on upstream trouble: an unavailable catalog yields
    /// zero-valued metrics.
    async fn get_metrics(&self, author: &str) -> Result<BooksMetrics, ProviderError> {
        let books = self.get_books().await;
        Ok(compute_metrics(&books, author))
    }
}

/// Fallback applied to every fetch: callers get an empty catalog instead of
/// an error so the HTTP layer can still answer 200. The cause is only logged.
pub fn snapshot_or_empty(fetched: Result<Vec<Book>, FetchError>) -> Vec<Book> {
    match fetched {
        Ok(books) => books,
        Err(e) => {
            error!("Error fetching books ({} failure): {}", e.kind(), e);
            Vec::new()
        }
    }
}

pub fn compute_metrics(books: &[Book], author: &str) -> BooksMetrics {
    if books.is_empty() {
        return BooksMetrics::default();
    }

    BooksMetrics {
        mean_units_sold: mean_units_sold(books),
        cheapest_book: cheapest_book(books)
            .map(|book| book.name.clone())
            .unwrap_or_default(),
        books_written_by_author: books_written_by_author(books, author),
    }
}

/// Truncating mean; 0 for an empty slice.
pub fn mean_units_sold(books: &[Book]) -> u64 {
    if books.is_empty() {
        return 0;
    }
    let total: u128 = books.iter().map(|book| u128::from(book.units_sold)).sum();
    // The mean never exceeds the largest element, so it fits back in u64.
    (total / books.len() as u128) as u64
}

/// First book with the lowest price.
pub fn cheapest_book(books: &[Book]) -> Option<&Book> {
    books.iter().min_by_key(|book| book.price)
}

/// Exact, case-sensitive match on the author field.
pub fn books_written_by_author(books: &[Book], author: &str) -> u64 {
    books.iter().filter(|book| book.author == author).count() as u64
}
