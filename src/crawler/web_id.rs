//! Page ID generation
//!
//! IDs are random integers in `0..=10^15` rendered as decimal strings.
//! Candidates already present in the store are discarded and a new one is
//! drawn, up to `MAX_ID_ATTEMPTS` times.

use rand::Rng;
use tracing::debug;

use crate::crawler::error::CrawlError;
use crate::index::PageStore;

/// Largest value a page ID can take
pub const WEB_ID_MAX: u64 = 1_000_000_000_000_000;

/// Number of candidates drawn before giving up
pub const MAX_ID_ATTEMPTS: usize = 64;

/// Draw a random page ID candidate
pub fn random_candidate() -> u64 {
    rand::thread_rng().gen_range(0..=WEB_ID_MAX)
}

/// Generate a page ID not yet present in `store`
///
/// `next_candidate` supplies candidate values; collisions are retried.
pub async fn generate_web_id<S, F>(store: &S, mut next_candidate: F) -> Result<String, CrawlError>
where
    S: PageStore + ?Sized,
    F: FnMut() -> u64,
{
    for attempt in 1..=MAX_ID_ATTEMPTS {
        let candidate = next_candidate().to_string();
        if !store.id_exists(&candidate).await? {
            return Ok(candidate);
        }
        debug!(attempt, candidate = %candidate, "Page ID collision, retrying");
    }

    Err(CrawlError::IdExhausted {
        attempts: MAX_ID_ATTEMPTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Category;
    use crate::index::{CategoryScore, DbError, KeywordOccurrence, MetadataRecord, Page};
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;

    /// Store that only knows a fixed set of used IDs
    struct UsedIds {
        used: HashSet<String>,
        checks: Mutex<Vec<String>>,
    }

    impl UsedIds {
        fn new(used: &[u64]) -> Self {
            Self {
                used: used.iter().map(u64::to_string).collect(),
                checks: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PageStore for UsedIds {
        async fn exists(&self, _url: &str) -> Result<bool, DbError> {
            Ok(false)
        }
        async fn id_exists(&self, web_id: &str) -> Result<bool, DbError> {
            self.checks.lock().unwrap().push(web_id.to_string());
            Ok(self.used.contains(web_id))
        }
        async fn get_id(&self, _url: &str) -> Result<Option<String>, DbError> {
            Ok(None)
        }
        async fn get_summary(&self, _url: &str) -> Result<Option<String>, DbError> {
            Ok(None)
        }
        async fn get_metadata(&self, _url: &str) -> Result<Option<MetadataRecord>, DbError> {
            Ok(None)
        }
        async fn get_keywords(&self, _url: &str) -> Result<Vec<KeywordOccurrence>, DbError> {
            Ok(Vec::new())
        }
        async fn get_categories(&self, _url: &str) -> Result<Vec<CategoryScore>, DbError> {
            Ok(Vec::new())
        }
        async fn get_urls_by_category(&self, _category: Category) -> Result<Vec<String>, DbError> {
            Ok(Vec::new())
        }
        async fn recent_urls(&self, _limit: usize) -> Result<Vec<String>, DbError> {
            Ok(Vec::new())
        }
        async fn insert_metadata(&self, _record: &MetadataRecord) -> Result<(), DbError> {
            Ok(())
        }
        async fn insert_page(&self, _page: &Page) -> Result<(), DbError> {
            Ok(())
        }
        async fn insert_keyword(&self, _keyword: &KeywordOccurrence) -> Result<(), DbError> {
            Ok(())
        }
        async fn insert_category(&self, _score: &CategoryScore) -> Result<(), DbError> {
            Ok(())
        }
        async fn update_metadata(&self, _url: &str, _h: &str, _p: &str) -> Result<u64, DbError> {
            Ok(0)
        }
    }

    #[tokio::test]
    async fn test_first_unused_candidate_is_returned() {
        let store = UsedIds::new(&[]);
        let id = generate_web_id(&store, || 42).await.unwrap();
        assert_eq!(id, "42");
        assert_eq!(store.checks.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_collisions_are_retried() {
        let store = UsedIds::new(&[1, 2, 3]);
        let mut candidates = [1u64, 2, 3, 4].into_iter();

        let id = generate_web_id(&store, || candidates.next().unwrap())
            .await
            .unwrap();

        assert_eq!(id, "4");
        assert_eq!(*store.checks.lock().unwrap(), vec!["1", "2", "3", "4"]);
    }

    #[tokio::test]
    async fn test_retry_budget_is_bounded() {
        let store = UsedIds::new(&[7]);
        let result = generate_web_id(&store, || 7).await;
        assert!(matches!(
            result,
            Err(CrawlError::IdExhausted { attempts }) if attempts == MAX_ID_ATTEMPTS
        ));
        assert_eq!(store.checks.lock().unwrap().len(), MAX_ID_ATTEMPTS);
    }

    #[test]
    fn test_random_candidates_are_in_range() {
        for _ in 0..1000 {
            assert!(random_candidate() <= WEB_ID_MAX);
        }
    }
}
