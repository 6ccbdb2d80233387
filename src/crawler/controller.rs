//! Page indexing pipeline
//!
//! One invocation of `CrawlController::index` walks a page through
//! checking, fetching, parsing, analyzing and persisting. Early exits
//! (already indexed, fetch failure, no paragraph content) are normal
//! outcomes, logged and returned as `IndexOutcome` variants. Persistence
//! failures are returned as errors.
//!
//! `CrawlController::crawl` adds bounded recursion. Pending pages are kept
//! in an explicit FIFO work list tagged with their remaining depth, so the
//! fanout and depth limits are enforced in one place. Everything runs
//! sequentially: a page is fully persisted before the next is fetched.

use chrono::Local;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::analysis::{ContentAnalyzer, KeywordDictionary};
use crate::crawler::error::{CrawlError, FetchError};
use crate::crawler::extraction::LexicalExtractor;
use crate::crawler::fetcher::HttpFetcher;
use crate::crawler::web_id::{generate_web_id, random_candidate};
use crate::crawler::{CrawlerConfig, DEPTH_CAP, FANOUT_CAP};
use crate::index::{CategoryScore, KeywordOccurrence, MetadataRecord, Page, PageStore};

/// Owner recorded when the URL has no host segment
pub const UNKNOWN_OWNER: &str = "Unknown";

/// Separator for the heading and paragraph excerpts
const EXCERPT_SEPARATOR: &str = ";";

/// How a single page invocation ended
#[derive(Debug)]
pub enum IndexOutcome {
    /// The URL was already in the page store
    AlreadyIndexed,

    /// The page could not be fetched
    FetchFailed(FetchError),

    /// The page had no paragraph content
    NoContent,

    /// The page was analyzed and persisted
    Indexed(IndexedPage),
}

impl IndexOutcome {
    /// Whether records were written for the page
    pub fn is_indexed(&self) -> bool {
        matches!(self, IndexOutcome::Indexed(_))
    }
}

/// Summary of a successfully indexed page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedPage {
    /// Assigned page ID
    pub web_id: String,

    /// URL of the page
    pub url: String,

    /// Number of distinct keywords stored
    pub keyword_count: usize,

    /// Absolute links discovered on the page, in document order
    pub links: Vec<String>,
}

/// One page visited during a crawl
#[derive(Debug)]
pub struct CrawlEntry {
    /// URL of the page
    pub url: String,

    /// Recursion level, zero for the seed
    pub level: u32,

    /// Result of indexing the page
    pub result: Result<IndexOutcome, CrawlError>,
}

/// Every page visited during a crawl, in processing order
#[derive(Debug, Default)]
pub struct CrawlReport {
    /// Visited pages
    pub entries: Vec<CrawlEntry>,
}

impl CrawlReport {
    /// Number of pages newly indexed
    pub fn indexed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(&e.result, Ok(outcome) if outcome.is_indexed()))
            .count()
    }
}

/// Result of re-extracting the metadata excerpts of an indexed page
#[derive(Debug)]
pub enum MetadataRefresh {
    /// The URL has not been indexed
    NotIndexed,

    /// The page could not be fetched
    FetchFailed(FetchError),

    /// The excerpts were overwritten in this many records
    Updated(u64),
}

/// Host segment of a `scheme://host/...` URL
///
/// Falls back to `UNKNOWN_OWNER` when the URL has fewer than three
/// `/`-delimited segments or the third one is empty.
pub fn owner_of(url: &str) -> String {
    match url.split('/').nth(2).filter(|host| !host.is_empty()) {
        Some(host) => host.to_string(),
        None => {
            warn!(url, "Malformed URL, recording owner as {}", UNKNOWN_OWNER);
            UNKNOWN_OWNER.to_string()
        }
    }
}

fn excerpt(items: &[String], limit: usize) -> String {
    items
        .iter()
        .take(limit)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(EXCERPT_SEPARATOR)
}

/// Drives fetching, extraction, analysis and persistence of pages
pub struct CrawlController<S> {
    store: S,
    dictionary: Arc<KeywordDictionary>,
    fetcher: HttpFetcher,
    config: CrawlerConfig,
}

impl<S: PageStore> CrawlController<S> {
    /// Create a controller writing to `store`
    pub fn new(
        store: S,
        dictionary: Arc<KeywordDictionary>,
        config: CrawlerConfig,
    ) -> Result<Self, CrawlError> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self {
            store,
            dictionary,
            fetcher,
            config,
        })
    }

    /// The page store this controller writes to
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Index a single page without following its links
    #[instrument(skip(self))]
    pub async fn index(&self, url: &str) -> Result<IndexOutcome, CrawlError> {
        if self.store.exists(url).await? {
            info!("URL already indexed: {}", url);
            return Ok(IndexOutcome::AlreadyIndexed);
        }

        info!("Fetching: {}", url);
        let html = match self.fetcher.fetch(url, &self.config.user_agent).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Error fetching {}: {}", url, e);
                return Ok(IndexOutcome::FetchFailed(e));
            }
        };

        let content = LexicalExtractor::new(&html).extract();
        if content.paragraphs.is_empty() {
            info!("No text content found at {}", url);
            return Ok(IndexOutcome::NoContent);
        }

        let web_id = generate_web_id(&self.store, random_candidate).await?;
        let analyzer =
            ContentAnalyzer::new(&self.dictionary).with_summary_words(self.config.summary_words);
        let analysis = analyzer.analyze(&content.paragraphs);
        let totals = analyzer.category_totals(&analysis.keyword_counts);

        for (keyword, count) in &analysis.keyword_counts {
            self.store
                .insert_keyword(&KeywordOccurrence {
                    keyword: keyword.clone(),
                    count: i64::try_from(*count).unwrap_or(i64::MAX),
                    web_id: web_id.clone(),
                })
                .await?;
        }

        self.store
            .insert_metadata(&MetadataRecord {
                url: url.to_string(),
                owner: owner_of(url),
                headings: excerpt(&content.headings, self.config.excerpt_limit),
                paragraphs: excerpt(&content.paragraphs, self.config.excerpt_limit),
                indexed_at: Local::now().naive_local(),
            })
            .await?;

        self.store
            .insert_page(&Page {
                web_id: web_id.clone(),
                url: url.to_string(),
                summary: analysis.summary,
            })
            .await?;

        for (category, count) in totals.iter() {
            self.store
                .insert_category(&CategoryScore {
                    category: category.to_string(),
                    count: i64::try_from(count).unwrap_or(i64::MAX),
                    web_id: web_id.clone(),
                })
                .await?;
        }

        info!("Successfully indexed {} with ID {}", url, web_id);

        Ok(IndexOutcome::Indexed(IndexedPage {
            web_id,
            url: url.to_string(),
            keyword_count: analysis.keyword_counts.len(),
            links: content.links,
        }))
    }

    /// Index `seed`, then follow the first discovered links
    ///
    /// Links are followed only from pages indexed by this call, at most
    /// `max_links` per page and `max_depth` levels below the seed. Both are
    /// clamped to `FANOUT_CAP` and `DEPTH_CAP` however the config was built.
    /// A failure on the seed is returned; failures on followed links are
    /// recorded in the report and do not stop the remaining links.
    #[instrument(skip(self))]
    pub async fn crawl(&self, seed: &str) -> Result<CrawlReport, CrawlError> {
        let max_links = self.config.max_links.min(FANOUT_CAP);
        let max_depth = self.config.max_depth.min(DEPTH_CAP);

        let mut report = CrawlReport::default();
        let mut pending = VecDeque::from([(seed.to_string(), 0u32)]);

        while let Some((url, level)) = pending.pop_front() {
            let result = self.index(&url).await;

            match &result {
                Ok(IndexOutcome::Indexed(page)) if level < max_depth => {
                    info!(
                        "Found {} links. Crawling first {}...",
                        page.links.len(),
                        max_links
                    );
                    pending.extend(
                        page.links
                            .iter()
                            .take(max_links)
                            .map(|link| (link.clone(), level + 1)),
                    );
                }
                Err(e) if level > 0 => warn!("Failed to index {}: {}", url, e),
                _ => {}
            }

            if level == 0 {
                let result = result?;
                report.entries.push(CrawlEntry {
                    url,
                    level,
                    result: Ok(result),
                });
            } else {
                report.entries.push(CrawlEntry { url, level, result });
            }
        }

        info!(
            "Crawl from {} finished: {} of {} pages indexed",
            seed,
            report.indexed_count(),
            report.entries.len()
        );
        Ok(report)
    }

    /// Re-fetch an indexed page and overwrite its heading and paragraph excerpts
    ///
    /// Keyword, category and page records are left untouched.
    #[instrument(skip(self))]
    pub async fn refresh_metadata(&self, url: &str) -> Result<MetadataRefresh, CrawlError> {
        if !self.store.exists(url).await? {
            info!("URL not indexed: {}", url);
            return Ok(MetadataRefresh::NotIndexed);
        }

        let html = match self.fetcher.fetch(url, &self.config.user_agent).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Error fetching {}: {}", url, e);
                return Ok(MetadataRefresh::FetchFailed(e));
            }
        };

        let content = LexicalExtractor::new(&html).extract();
        let updated = self
            .store
            .update_metadata(
                url,
                &excerpt(&content.headings, self.config.excerpt_limit),
                &excerpt(&content.paragraphs, self.config.excerpt_limit),
            )
            .await?;

        info!("Updated metadata for {} ({} records)", url, updated);
        Ok(MetadataRefresh::Updated(updated))
    }
}
