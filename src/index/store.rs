//! Persistence contract used by the crawler and search modules

use async_trait::async_trait;

use crate::analysis::Category;
use crate::index::error::DbError;
use crate::index::{CategoryScore, KeywordOccurrence, MetadataRecord, Page};

/// Read/write access to indexed pages
///
/// Every write is committed on its own; callers must not assume that a
/// sequence of writes is atomic.
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Whether a page with this URL has been indexed
    async fn exists(&self, url: &str) -> Result<bool, DbError>;

    /// Whether a page with this ID exists
    async fn id_exists(&self, web_id: &str) -> Result<bool, DbError>;

    /// ID of the page with this URL
    async fn get_id(&self, url: &str) -> Result<Option<String>, DbError>;

    /// Summary of the page with this URL
    async fn get_summary(&self, url: &str) -> Result<Option<String>, DbError>;

    /// Stored metadata for this URL
    async fn get_metadata(&self, url: &str) -> Result<Option<MetadataRecord>, DbError>;

    /// Keywords of the page, highest count first
    async fn get_keywords(&self, url: &str) -> Result<Vec<KeywordOccurrence>, DbError>;

    /// Category scores of the page, highest count first
    async fn get_categories(&self, url: &str) -> Result<Vec<CategoryScore>, DbError>;

    /// URLs scored in a category, highest score first
    async fn get_urls_by_category(&self, category: Category) -> Result<Vec<String>, DbError>;

    /// URLs in metadata insertion date order, oldest first
    async fn recent_urls(&self, limit: usize) -> Result<Vec<String>, DbError>;

    /// Write a metadata record
    async fn insert_metadata(&self, record: &MetadataRecord) -> Result<(), DbError>;

    /// Write a page record
    async fn insert_page(&self, page: &Page) -> Result<(), DbError>;

    /// Write a keyword occurrence
    async fn insert_keyword(&self, keyword: &KeywordOccurrence) -> Result<(), DbError>;

    /// Write a category score
    async fn insert_category(&self, score: &CategoryScore) -> Result<(), DbError>;

    /// Overwrite the heading and paragraph excerpts of an existing metadata record
    ///
    /// Returns the number of records updated.
    async fn update_metadata(
        &self,
        url: &str,
        headings: &str,
        paragraphs: &str,
    ) -> Result<u64, DbError>;
}
