//! Search dispatch: usage counting, cache lookup and backend fan-out.

use std::sync::Arc;

use tracing::info;

use crate::domain::{CommentHit, CounterStore, PostHit, SearchCategory, SearchPage, SearchQuery};
use crate::provider::{Result, SearchProvider};
use crate::services::search_cache::{CacheKey, SearchCache};

/// Dispatches normalized queries against the search backend, with usage
/// counting and a read-through result cache in front.
#[derive(Clone)]
pub struct SearchService {
    provider: Arc<dyn SearchProvider>,
    cache: SearchCache,
    counters: CounterStore,
}

impl SearchService {
    pub fn new(
        provider: Arc<dyn SearchProvider>,
        cache: SearchCache,
        counters: CounterStore,
    ) -> Self {
        Self {
            provider,
            cache,
            counters,
        }
    }

    /// One page of image posts, served from cache when possible.
    pub async fn search_image_posts(&self, query: &SearchQuery) -> Result<SearchPage<PostHit>> {
        // Counted before the cache check; hits and misses both count.
        self.counters.increment(SearchCategory::ImagePosts);

        let key = CacheKey::new(SearchCategory::ImagePosts, query.term(), query.offset());
        if let Some(page) = self.cache.get_posts(&key) {
            return Ok(page);
        }

        info!("search {}", key);

        let raw = self
            .provider
            .search_image_posts(query.term(), query.offset())
            .await?;
        let page = SearchPage::from_provider(query.term(), raw);

        self.cache.insert_posts(key, page.clone());
        Ok(page)
    }

    /// One page of comments, authors redacted before anything is cached or
    /// returned.
    pub async fn search_comments(&self, query: &SearchQuery) -> Result<SearchPage<CommentHit>> {
        self.counters.increment(SearchCategory::Comments);

        let key = CacheKey::new(SearchCategory::Comments, query.term(), query.offset());
        if let Some(page) = self.cache.get_comments(&key) {
            return Ok(page);
        }

        info!("search {}", key);

        let raw = self
            .provider
            .search_comments(query.term(), query.offset())
            .await?;
        let page = SearchPage::from_provider(query.term(), raw.map(CommentHit::from));

        self.cache.insert_comments(key, page.clone());
        Ok(page)
    }
}
