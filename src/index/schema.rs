//! # Database Schema Module
//!
//! This module creates the page store schema. Table and column names match
//! the layout existing databases already use:
//!
//! 1. `Metadata` - one row per indexed URL with owner, excerpts and date
//! 2. `webpage` - page ID, URL and summary
//! 3. `Category` - twelve rows per page, one per fixed category
//! 4. `Keywords` - one row per distinct keyword found on a page
//!
//! Creation is idempotent and runs every time the database is opened.

use crate::index::error::DbError;
use libsql::{params, Connection};

const TABLES: &[(&str, &str)] = &[
    (
        "Metadata",
        "CREATE TABLE IF NOT EXISTS Metadata (
            url TEXT,
            owner TEXT,
            heading TEXT,
            paragraph TEXT,
            date TEXT
        )",
    ),
    (
        "webpage",
        "CREATE TABLE IF NOT EXISTS webpage (
            webpage_ID TEXT,
            url TEXT,
            summary TEXT
        )",
    ),
    (
        "Category",
        "CREATE TABLE IF NOT EXISTS Category (
            category TEXT,
            category_count INTEGER,
            webpage_ID TEXT
        )",
    ),
    (
        "Keywords",
        "CREATE TABLE IF NOT EXISTS Keywords (
            keyword TEXT,
            keyword_count INTEGER,
            webpage_ID TEXT
        )",
    ),
];

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_metadata_url ON Metadata(url)",
    "CREATE INDEX IF NOT EXISTS idx_webpage_url ON webpage(url)",
    "CREATE INDEX IF NOT EXISTS idx_webpage_id ON webpage(webpage_ID)",
    "CREATE INDEX IF NOT EXISTS idx_category_webpage ON Category(webpage_ID)",
    "CREATE INDEX IF NOT EXISTS idx_category_name ON Category(category)",
    "CREATE INDEX IF NOT EXISTS idx_keywords_webpage ON Keywords(webpage_ID)",
];

/// Initialize the database schema
pub async fn initialize_schema(conn: &Connection) -> Result<(), DbError> {
    for (table, sql) in TABLES {
        conn.execute(sql, params![])
            .await
            .map_err(|e| DbError::Schema(format!("Failed to create {} table: {}", table, e)))?;
    }

    for sql in INDEXES {
        conn.execute(sql, params![])
            .await
            .map_err(|e| DbError::Schema(format!("Failed to create index: {}", e)))?;
    }

    Ok(())
}
