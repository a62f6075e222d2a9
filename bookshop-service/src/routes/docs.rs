use crate::models::book::Book;
use crate::models::responses::{BooksMetrics, ErrorResponse};
use crate::routes::books;
use utoipa::OpenApi;

pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshop API",
        description = "Book catalog and sales metrics served from the upstream books API"
    ),
    paths(books::get_books, books::get_metrics),
    components(schemas(Book, BooksMetrics, ErrorResponse)),
    tags((name = "books", description = "Catalog and metrics"))
)]
pub struct ApiDoc;
