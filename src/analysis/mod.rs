//! # Content Analysis Module
//!
//! This module turns extracted paragraph text into keyword counts, category
//! scores and a short summary. It is the second half of the indexing
//! pipeline: the crawler extracts text, this module scores it.
//!
//! ## Key Components
//!
//! - `Category`: The closed set of twelve topical categories
//! - `KeywordDictionary`: Immutable keyword to category label mapping
//! - `ContentAnalyzer`: Tokenizer, keyword counter and summary builder
//! - `CategoryTotals`: Per-category aggregate of keyword counts

mod analyzer;
mod error;
mod keywords;

pub use analyzer::{capitalize, Analysis, CategoryTotals, ContentAnalyzer, SUMMARY_SUFFIX};
pub use error::KeywordError;
pub use keywords::KeywordDictionary;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed topical categories a page is scored against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Finance,
    Health,
    Science,
    Technology,
    #[serde(rename = "UK_Politics")]
    UkPolitics,
    Military,
    America,
    History,
    Geography,
    Literature,
    Sport,
    Politics,
}

impl Category {
    /// Every category, in storage order
    pub const ALL: [Category; 12] = [
        Category::Finance,
        Category::Health,
        Category::Science,
        Category::Technology,
        Category::UkPolitics,
        Category::Military,
        Category::America,
        Category::History,
        Category::Geography,
        Category::Literature,
        Category::Sport,
        Category::Politics,
    ];

    /// The label used in the keyword configuration and in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Finance => "Finance",
            Category::Health => "Health",
            Category::Science => "Science",
            Category::Technology => "Technology",
            Category::UkPolitics => "UK_Politics",
            Category::Military => "Military",
            Category::America => "America",
            Category::History => "History",
            Category::Geography => "Geography",
            Category::Literature => "Literature",
            Category::Sport => "Sport",
            Category::Politics => "Politics",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert_eq!(Category::UkPolitics.to_string(), "UK_Politics");
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        assert!("Weather".parse::<Category>().is_err());
        assert!("finance".parse::<Category>().is_err());
    }

    #[test]
    fn test_index_matches_storage_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }
}
