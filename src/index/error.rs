//! # Database Error Types Module
//!
//! This module defines error types specific to the page store. Every
//! failure of a persistence call surfaces as a `DbError`; the crawler
//! propagates it rather than ignoring it.

use thiserror::Error;

/// Error type for database operations
#[derive(Debug, Error)]
pub enum DbError {
    /// SQL query error
    #[error("SQL query error: {0}")]
    Query(String),

    /// Schema error
    #[error("Schema error: {0}")]
    Schema(String),

    /// Data error
    #[error("Data error: {0}")]
    Data(String),

    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),
}
