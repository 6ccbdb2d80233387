//! Search module for indexed pages
//!
//! This module answers questions about what has been indexed: which pages
//! share a page's primary category, what was stored for a page, and which
//! pages score in a category. It reads only through the `PageStore`
//! contract.

mod error;
mod retrieval;

pub use error::SearchError;
pub use retrieval::{
    export_file_name, export_summary, page_report, pages_in_category, related_pages, PageReport,
    SearchOptions, NO_SUMMARY,
};
