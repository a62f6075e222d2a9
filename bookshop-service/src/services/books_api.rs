use crate::models::book::Book;
use crate::utils::config::Config;
use async_trait::async_trait;
use reqwest::Client;
use serde::de;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("books API URL not configured")]
    NotConfigured,
    #[error("failed to make HTTP request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::NotConfigured => "configuration",
            FetchError::Request(_) => "transport",
            FetchError::Decode(_) => "decode",
        }
    }
}

#[async_trait]
pub trait BooksRepository {
    async fn get_books(&self) -> Result<Vec<Book>, FetchError>;
}

pub fn build_client(config: &Config) -> reqwest::Result<Client> {
    Client::builder().timeout(config.request_timeout).build()
}

/// Reads the whole catalog from the upstream books API with a single GET.
pub struct HttpBooksRepository {
    client: Client,
    url: Option<String>,
}

impl HttpBooksRepository {
    pub fn new(client: Client, url: Option<String>) -> Self {
        Self { client, url }
    }

    pub fn from_config(client: Client, config: &Config) -> Self {
        Self::new(client, config.books_api_url.clone())
    }
}

#[async_trait]
impl BooksRepository for HttpBooksRepository {
    /// The response status is not consulted: a body that decodes as a list of
    /// books is a success whatever the status, anything else is a decode
    /// failure. Dropping the returned future aborts the request.
    async fn get_books(&self) -> Result<Vec<Book>, FetchError> {
        let url = self.url.as_deref().ok_or(FetchError::NotConfigured)?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Books API at {} responded with status {}", url, status);
        }

        let body = response.bytes().await?;
        let books = decode_books(&body)?;

        debug!("Fetched {} books from {}", books.len(), url);
        Ok(books)
    }
}

/// Decodes the first JSON value of the body and ignores anything after it.
/// `null` is an empty catalog; an empty body is a decode failure.
fn decode_books(body: &[u8]) -> Result<Vec<Book>, serde_json::Error> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<Vec<Book>>>();
    match values.next() {
        Some(books) => Ok(books?.unwrap_or_default()),
        None => Err(de::Error::custom("empty response body")),
    }
}
