//! Retrieval of indexed pages

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use super::error::SearchError;
use crate::analysis::Category;
use crate::index::{CategoryScore, KeywordOccurrence, PageStore};

/// Summary text reported for a URL that has none
pub const NO_SUMMARY: &str = "No summary available.";

/// Options for retrieval queries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Maximum number of related URLs to return
    pub limit: usize,

    /// Maximum number of keywords in a page report
    pub keyword_limit: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: 5,
            keyword_limit: 20,
        }
    }
}

/// Everything stored about one page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageReport {
    /// URL of the page
    pub url: String,

    /// Stored summary, or `NO_SUMMARY`
    pub summary: String,

    /// Top keywords, highest count first
    pub keywords: Vec<KeywordOccurrence>,

    /// Category scores, highest first
    pub categories: Vec<CategoryScore>,
}

/// URLs sharing the primary category of `url`
///
/// The primary category is the page's highest-scoring one. Unknown URLs
/// yield an empty list.
#[instrument(skip(store))]
pub async fn related_pages<S: PageStore + ?Sized>(
    store: &S,
    url: &str,
    options: &SearchOptions,
) -> Result<Vec<String>, SearchError> {
    let categories = store.get_categories(url).await?;
    let Some(primary) = categories.first() else {
        debug!("No categories stored for {}", url);
        return Ok(Vec::new());
    };

    let category: Category = primary
        .category
        .parse()
        .map_err(SearchError::InvalidParameters)?;
    debug!("Primary category of {} is {}", url, category);

    let mut urls = store.get_urls_by_category(category).await?;
    urls.truncate(options.limit);
    Ok(urls)
}

/// Collect the stored summary, keywords and categories of `url`
#[instrument(skip(store))]
pub async fn page_report<S: PageStore + ?Sized>(
    store: &S,
    url: &str,
    options: &SearchOptions,
) -> Result<PageReport, SearchError> {
    let summary = store
        .get_summary(url)
        .await?
        .unwrap_or_else(|| NO_SUMMARY.to_string());

    let mut keywords = store.get_keywords(url).await?;
    keywords.truncate(options.keyword_limit);

    let categories = store.get_categories(url).await?;

    Ok(PageReport {
        url: url.to_string(),
        summary,
        keywords,
        categories,
    })
}

/// URLs scored in the category named `label`, highest score first
pub async fn pages_in_category<S: PageStore + ?Sized>(
    store: &S,
    label: &str,
) -> Result<Vec<String>, SearchError> {
    let category: Category = label.parse().map_err(SearchError::InvalidParameters)?;
    Ok(store.get_urls_by_category(category).await?)
}

/// File name for an exported summary of `url`
pub fn export_file_name(url: &str) -> String {
    let stripped = url.replace("https://", "").replace("http://", "");
    format!("{}.txt", stripped.replace('/', "_"))
}

/// Write the summary of `url` to a text file in `dir`
///
/// Returns the path of the written file.
pub async fn export_summary(dir: &Path, url: &str, summary: &str) -> Result<PathBuf, SearchError> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(export_file_name(url));
    let contents = format!("URL: {}\n\nSUMMARY:\n{}", url, summary);
    tokio::fs::write(&path, contents).await?;
    info!("Saved summary to {}", path.display());
    Ok(path)
}
