use std::fmt;
use std::time::Duration;

use moka::sync::Cache;

use crate::domain::{CommentHit, PostHit, SearchCategory, SearchPage};

const MAX_ENTRIES: u64 = 50_000;
const ENTRY_TTL: Duration = Duration::from_secs(5 * 60);

/// One cache entry per category, term and page offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    category: SearchCategory,
    term: String,
    offset: i64,
}

impl CacheKey {
    pub fn new(category: SearchCategory, term: &str, offset: i64) -> Self {
        Self {
            category,
            term: term.to_string(),
            offset,
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.category, self.term, self.offset)
    }
}

#[derive(Clone)]
enum CachedPage {
    ImagePosts(SearchPage<PostHit>),
    Comments(SearchPage<CommentHit>),
}

/// Read-through cache for shaped result pages.
///
/// Entries expire after a fixed TTL; the capacity bound covers both
/// categories together. Entries are replaced wholesale, never mutated.
#[derive(Clone)]
pub struct SearchCache {
    inner: Cache<CacheKey, CachedPage>,
}

impl SearchCache {
    pub fn new() -> Self {
        Self::with_ttl(ENTRY_TTL)
    }

    /// Cache with a custom entry lifetime. Tests use short ones.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(MAX_ENTRIES)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub fn get_posts(&self, key: &CacheKey) -> Option<SearchPage<PostHit>> {
        match self.inner.get(key) {
            Some(CachedPage::ImagePosts(page)) => Some(page),
            _ => None,
        }
    }

    pub fn insert_posts(&self, key: CacheKey, page: SearchPage<PostHit>) {
        self.inner.insert(key, CachedPage::ImagePosts(page));
    }

    pub fn get_comments(&self, key: &CacheKey) -> Option<SearchPage<CommentHit>> {
        match self.inner.get(key) {
            Some(CachedPage::Comments(page)) => Some(page),
            _ => None,
        }
    }

    pub fn insert_comments(&self, key: CacheKey, page: SearchPage<CommentHit>) {
        self.inner.insert(key, CachedPage::Comments(page));
    }
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new()
    }
}
