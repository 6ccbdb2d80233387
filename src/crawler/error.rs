//! Error types for the crawler module

use crate::index::DbError;
use thiserror::Error;

/// Error type for fetching a single page
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL is not a syntactically absolute URL
    #[error("Invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Connection, TLS, timeout or body decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Unexpected status {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Error type for crawler operations
///
/// Early exits of the indexing pipeline (already indexed, fetch failure,
/// empty content) are not errors; see `IndexOutcome`.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),

    /// Persistence failure
    #[error("Storage error: {0}")]
    Store(#[from] DbError),

    /// No unused page ID was found within the retry budget
    #[error("No unused page ID found after {attempts} attempts")]
    IdExhausted { attempts: usize },
}
