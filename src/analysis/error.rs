//! Error types for the analysis module

use thiserror::Error;

/// Error type for loading the keyword dictionary
#[derive(Debug, Error)]
pub enum KeywordError {
    /// The keyword file exists but could not be read
    #[error("Failed to read keyword file: {0}")]
    Io(#[from] std::io::Error),

    /// The keyword file is not a JSON object of strings
    #[error("Failed to parse keyword file: {0}")]
    Parse(#[from] serde_json::Error),
}
