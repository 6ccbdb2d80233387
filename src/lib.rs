//! # linksurfer - Keyword-driven web page indexer
//!
//! This crate fetches web pages, extracts their paragraphs, headings and
//! links with a lightweight lexical scanner, scores the text against a fixed
//! set of topical categories using a keyword dictionary, and stores the
//! result for later retrieval.
//!
//! ## Features
//!
//! - Single-page indexing and a bounded recursive crawl (one level, five links)
//! - Dependency-free HTML extraction by flat substring scanning
//! - Keyword counting with case-normalized dictionary lookup
//! - Twelve fixed category scores per page and a short summary
//! - Page store on LibSQL with related-page lookup by primary category
//!
//! ## Example
//!
//! ```rust,no_run
//! use linksurfer::analysis::KeywordDictionary;
//! use linksurfer::crawler::{CrawlController, CrawlerConfig, IndexOutcome};
//! use linksurfer::index::Database;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new_from_path("data/linksurfer.db").await?;
//!     let dictionary = Arc::new(KeywordDictionary::load("data/keywords.json")?);
//!     let controller = CrawlController::new(db, dictionary, CrawlerConfig::default())?;
//!
//!     if let IndexOutcome::Indexed(page) = controller.index("https://example.com").await? {
//!         println!("Indexed {} as {}", page.url, page.web_id);
//!     }
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod crawler;
pub mod index;
pub mod search;
