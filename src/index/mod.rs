//! Index module for the page store
//!
//! This module provides the record types written by the crawler, the
//! `PageStore` contract the crawler and search modules depend on, and the
//! libsql-backed `Database` implementing it.

mod database;
pub mod error;
mod schema;
mod store;

pub use database::Database;
pub use error::DbError;
pub use store::PageStore;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Date format used for the metadata `date` column
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// An indexed page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Unique page ID, a decimal string
    pub web_id: String,

    /// URL of the page
    pub url: String,

    /// Generated summary
    pub summary: String,
}

/// Metadata stored for each indexed URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// URL of the page
    pub url: String,

    /// Host component of the URL
    pub owner: String,

    /// Semicolon-joined excerpt of the first headings
    pub headings: String,

    /// Semicolon-joined excerpt of the first paragraphs
    pub paragraphs: String,

    /// When the page was indexed
    pub indexed_at: NaiveDateTime,
}

/// Occurrences of one keyword on one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordOccurrence {
    /// Capitalized keyword
    pub keyword: String,

    /// Number of occurrences
    pub count: i64,

    /// Page the keyword was found on
    pub web_id: String,
}

/// Score of one category on one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Category label
    pub category: String,

    /// Sum of matching keyword occurrences
    pub count: i64,

    /// Page the score belongs to
    pub web_id: String,
}
