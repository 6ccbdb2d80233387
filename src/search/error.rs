//! # Search Error Types Module
//!
//! This module defines error types for retrieving indexed pages: lookups of
//! related pages, page reports and summary exports.

use thiserror::Error;

use crate::index::DbError;

/// Errors that can occur during search operations
#[derive(Debug, Error)]
pub enum SearchError {
    /// Error occurred during database operations
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// Error occurred while writing an export
    #[error("Export error: {0}")]
    Export(#[from] std::io::Error),

    /// Invalid search parameters
    #[error("Invalid search parameters: {0}")]
    InvalidParameters(String),
}
