pub mod books_api;
pub mod metrics;
