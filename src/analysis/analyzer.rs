//! Keyword counting, category aggregation and summary generation

use crate::analysis::{Category, KeywordDictionary};
use std::collections::BTreeMap;
use tracing::debug;

/// Default number of tokens kept in a page summary
pub const DEFAULT_SUMMARY_WORDS: usize = 50;

/// Literal suffix appended to every summary
pub const SUMMARY_SUFFIX: &str = "...";

/// Punctuation stripped from both ends of every token
const TRIM_CHARS: &[char] = &['.', ',', ';', '(', ')', '[', ']', '"'];

/// Uppercase the first character of `word`, leaving the rest unchanged
///
/// This is the canonical form used to store keyword counts.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Result of analyzing a page's paragraphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// Occurrences per keyword, keyed by the capitalized keyword
    pub keyword_counts: BTreeMap<String, u64>,

    /// First tokens of the page followed by `...`
    pub summary: String,
}

/// Aggregate keyword counts for each fixed category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    counts: [u64; 12],
}

impl CategoryTotals {
    /// Total for a single category
    pub fn get(&self, category: Category) -> u64 {
        self.counts[category.index()]
    }

    /// Every category with its total, always exactly twelve entries
    pub fn iter(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        Category::ALL.iter().map(|c| (*c, self.counts[c.index()]))
    }

    fn add(&mut self, category: Category, count: u64) {
        self.counts[category.index()] += count;
    }
}

/// Tokenizes paragraph text and scores it against a keyword dictionary
#[derive(Debug, Clone, Copy)]
pub struct ContentAnalyzer<'a> {
    dictionary: &'a KeywordDictionary,
    summary_words: usize,
}

impl<'a> ContentAnalyzer<'a> {
    /// Create an analyzer with the default summary length
    pub fn new(dictionary: &'a KeywordDictionary) -> Self {
        Self {
            dictionary,
            summary_words: DEFAULT_SUMMARY_WORDS,
        }
    }

    /// Set how many tokens the summary keeps
    pub fn with_summary_words(mut self, summary_words: usize) -> Self {
        self.summary_words = summary_words;
        self
    }

    /// Count keyword occurrences and build the summary
    pub fn analyze<S: AsRef<str>>(&self, paragraphs: &[S]) -> Analysis {
        let full_text = paragraphs
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");

        let mut keyword_counts = BTreeMap::new();
        let mut summary_tokens = Vec::with_capacity(self.summary_words);

        let tokens = full_text
            .split_whitespace()
            .map(|word| word.trim_matches(TRIM_CHARS))
            .filter(|word| !word.is_empty());

        for token in tokens {
            if self.dictionary.category_of(token).is_some() {
                *keyword_counts.entry(capitalize(token)).or_insert(0) += 1;
            }

            if summary_tokens.len() < self.summary_words {
                summary_tokens.push(token);
            }
        }

        let mut summary = summary_tokens.join(" ");
        summary.push_str(SUMMARY_SUFFIX);

        Analysis {
            keyword_counts,
            summary,
        }
    }

    /// Sum keyword counts into the twelve fixed categories
    ///
    /// Each keyword's category is looked up again from its stored form.
    /// Labels outside the fixed set add nothing.
    pub fn category_totals(&self, keyword_counts: &BTreeMap<String, u64>) -> CategoryTotals {
        let mut totals = CategoryTotals::default();
        for (keyword, count) in keyword_counts {
            match self.dictionary.category_of(keyword) {
                Some(label) => match label.parse::<Category>() {
                    Ok(category) => totals.add(category, *count),
                    Err(_) => debug!(keyword = %keyword, label = %label, "Keyword category is not scored"),
                },
                None => debug!(keyword = %keyword, "Keyword has no category on re-lookup"),
            }
        }
        totals
    }
}
