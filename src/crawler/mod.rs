//! # Website Crawler Module
//!
//! This module fetches pages, extracts their text and links, and drives the
//! indexing pipeline that scores and persists them.
//!
//! ## Key Components
//!
//! - `CrawlerConfig`: Fetch policy, summary and excerpt sizes, recursion bounds
//! - `HttpFetcher`: Single-GET page retrieval with a custom user agent
//! - `LexicalExtractor`: Flat scanner for paragraphs, headings and links
//! - `CrawlController`: Per-page pipeline and bounded recursive crawl
//!
//! ## Usage
//!
//! ```rust,no_run
//! use linksurfer::analysis::KeywordDictionary;
//! use linksurfer::crawler::{CrawlController, CrawlerConfig};
//! use linksurfer::index::Database;
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::new_from_path("data/linksurfer.db").await?;
//! let dictionary = Arc::new(KeywordDictionary::load("data/keywords.json")?);
//! let controller = CrawlController::new(db, dictionary, CrawlerConfig::default())?;
//!
//! let report = controller.crawl("https://www.bbc.co.uk").await?;
//! println!("Indexed {} pages", report.indexed_count());
//! # Ok(())
//! # }
//! ```

mod config;
mod controller;
mod error;
mod extraction;
mod fetcher;
pub mod web_id;

pub use config::{CrawlerConfig, CrawlerConfigBuilder, DEPTH_CAP, FANOUT_CAP};
pub use controller::{
    owner_of, CrawlController, CrawlEntry, CrawlReport, IndexOutcome, IndexedPage,
    MetadataRefresh, UNKNOWN_OWNER,
};
pub use error::{CrawlError, FetchError};
pub use extraction::{ExtractedContent, LexicalExtractor, Links, TagContents};
pub use fetcher::HttpFetcher;
