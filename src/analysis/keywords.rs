//! Keyword dictionary loaded from the keyword configuration file

use crate::analysis::error::KeywordError;
use crate::analysis::{capitalize, Category};
use std::collections::HashMap;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

/// Immutable mapping from keyword text to a category label
///
/// Keys keep their original casing. Lookups try the word as given, then
/// its capitalized form.
#[derive(Debug, Clone, Default)]
pub struct KeywordDictionary {
    words: HashMap<String, String>,
}

impl KeywordDictionary {
    /// Build a dictionary from an in-memory mapping
    pub fn from_map(words: HashMap<String, String>) -> Self {
        let unscored: Vec<&str> = words
            .iter()
            .filter(|(_, label)| label.parse::<Category>().is_err())
            .map(|(word, _)| word.as_str())
            .collect();

        if !unscored.is_empty() {
            warn!(
                "{} keywords map to categories outside the scored set and will not contribute to category scores",
                unscored.len()
            );
            debug!("Unscored keywords: {:?}", unscored);
        }

        Self { words }
    }

    /// Load the dictionary from a JSON object file
    ///
    /// A missing file is not an error: a warning is logged and an empty
    /// dictionary is returned, so every lookup yields `None`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, KeywordError> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Keyword file {} not found, using an empty dictionary", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(KeywordError::Io(e)),
        };

        let words: HashMap<String, String> = serde_json::from_str(&content)?;
        info!("Loaded {} keywords from {}", words.len(), path.display());
        Ok(Self::from_map(words))
    }

    /// Category label of `word`, trying the exact form then the capitalized form
    pub fn category_of(&self, word: &str) -> Option<&str> {
        self.words
            .get(word)
            .or_else(|| self.words.get(&capitalize(word)))
            .map(String::as_str)
    }

    /// Number of keywords in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no keywords
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeywordDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn dictionary() -> KeywordDictionary {
        [("Finance", "Finance"), ("Economy", "Finance"), ("nhs", "Health")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_exact_match() {
        let dict = dictionary();
        assert_eq!(dict.category_of("Finance"), Some("Finance"));
        assert_eq!(dict.category_of("nhs"), Some("Health"));
    }

    #[test]
    fn test_capitalized_fallback() {
        let dict = dictionary();
        assert_eq!(dict.category_of("economy"), Some("Finance"));
        // Only the first letter is changed, so an all-caps word does not match.
        assert_eq!(dict.category_of("ECONOMY"), None);
        assert_eq!(dict.category_of("Nhs"), None);
    }

    #[test]
    fn test_missing_word() {
        assert_eq!(dictionary().category_of("weather"), None);
        assert_eq!(dictionary().category_of(""), None);
    }

    #[test]
    fn test_load_missing_file_yields_empty_dictionary() {
        let dir = tempdir().unwrap();
        let dict = KeywordDictionary::load(dir.path().join("keywords.json")).unwrap();
        assert!(dict.is_empty());
        assert_eq!(dict.category_of("Finance"), None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keywords.json");
        std::fs::write(&path, r#"{"Army": "Military", "Football": "Sport"}"#).unwrap();

        let dict = KeywordDictionary::load(&path).unwrap();
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.category_of("army"), Some("Military"));
        assert_eq!(dict.category_of("Football"), Some("Sport"));
    }

    #[test]
    fn test_load_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("keywords.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(matches!(
            KeywordDictionary::load(&path),
            Err(KeywordError::Parse(_))
        ));
    }
}
