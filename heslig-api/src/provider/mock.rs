//! Mock search provider for testing.

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{InstanceOverview, ProviderError, Result, SearchProvider};
use crate::domain::{CommentDocument, PostHit, ProviderPage};

/// Mock provider with programmable responses and per-method call counters.
///
/// # Examples
///
/// ```ignore
/// let provider = MockProvider::new()
///     .with_comments(some_page)
///     .with_document_counts(19654, 1_500_000);
///
/// // Fail only the instance-wide stats query:
/// let provider = MockProvider::new().failing_overview();
/// ```
#[derive(Clone)]
pub struct MockProvider {
    posts: Arc<Mutex<ProviderPage<PostHit>>>,
    comments: Arc<Mutex<ProviderPage<CommentDocument>>>,
    overview: Arc<Mutex<InstanceOverview>>,
    image_post_count: Arc<AtomicU64>,
    comment_count: Arc<AtomicU64>,
    fail_searches: Arc<AtomicBool>,
    fail_counts: Arc<AtomicBool>,
    fail_overview: Arc<AtomicBool>,
    post_search_calls: Arc<AtomicUsize>,
    comment_search_calls: Arc<AtomicUsize>,
}

fn empty_page<T>() -> ProviderPage<T> {
    ProviderPage {
        hits: vec![],
        limit: 20,
        total: 0,
        offset: 0,
        query_time_ms: 0,
    }
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            posts: Arc::new(Mutex::new(empty_page())),
            comments: Arc::new(Mutex::new(empty_page())),
            overview: Arc::new(Mutex::new(InstanceOverview {
                database_size: 0,
                last_update: None,
            })),
            image_post_count: Arc::new(AtomicU64::new(0)),
            comment_count: Arc::new(AtomicU64::new(0)),
            fail_searches: Arc::new(AtomicBool::new(false)),
            fail_counts: Arc::new(AtomicBool::new(false)),
            fail_overview: Arc::new(AtomicBool::new(false)),
            post_search_calls: Arc::new(AtomicUsize::new(0)),
            comment_search_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Page returned for every image post search.
    pub fn with_posts(self, page: ProviderPage<PostHit>) -> Self {
        *self.posts.lock().unwrap() = page;
        self
    }

    /// Page returned for every comment search.
    pub fn with_comments(self, page: ProviderPage<CommentDocument>) -> Self {
        *self.comments.lock().unwrap() = page;
        self
    }

    pub fn with_document_counts(self, image_posts: u64, comments: u64) -> Self {
        self.image_post_count.store(image_posts, Ordering::SeqCst);
        self.comment_count.store(comments, Ordering::SeqCst);
        self
    }

    pub fn with_overview(self, overview: InstanceOverview) -> Self {
        *self.overview.lock().unwrap() = overview;
        self
    }

    /// Make both search methods fail.
    pub fn failing_searches(self) -> Self {
        self.fail_searches.store(true, Ordering::SeqCst);
        self
    }

    /// Make both document count methods fail.
    pub fn failing_counts(self) -> Self {
        self.fail_counts.store(true, Ordering::SeqCst);
        self
    }

    /// Make only the instance-wide stats query fail.
    pub fn failing_overview(self) -> Self {
        self.fail_overview.store(true, Ordering::SeqCst);
        self
    }

    /// Number of image post searches that reached the provider.
    pub fn post_search_calls(&self) -> usize {
        self.post_search_calls.load(Ordering::SeqCst)
    }

    /// Number of comment searches that reached the provider.
    pub fn comment_search_calls(&self) -> usize {
        self.comment_search_calls.load(Ordering::SeqCst)
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SearchProvider for MockProvider {
    async fn search_image_posts(&self, _term: &str, _offset: i64) -> Result<ProviderPage<PostHit>> {
        self.post_search_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_searches.load(Ordering::SeqCst) {
            return Err(ProviderError::Backend("mock failure".to_string()));
        }
        Ok(self.posts.lock().unwrap().clone())
    }

    async fn search_comments(
        &self,
        _term: &str,
        _offset: i64,
    ) -> Result<ProviderPage<CommentDocument>> {
        self.comment_search_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_searches.load(Ordering::SeqCst) {
            return Err(ProviderError::Backend("mock failure".to_string()));
        }
        Ok(self.comments.lock().unwrap().clone())
    }

    async fn image_post_count(&self) -> Result<u64> {
        if self.fail_counts.load(Ordering::SeqCst) {
            return Err(ProviderError::Backend("mock failure".to_string()));
        }
        Ok(self.image_post_count.load(Ordering::SeqCst))
    }

    async fn comment_count(&self) -> Result<u64> {
        if self.fail_counts.load(Ordering::SeqCst) {
            return Err(ProviderError::Backend("mock failure".to_string()));
        }
        Ok(self.comment_count.load(Ordering::SeqCst))
    }

    async fn instance_overview(&self) -> Result<InstanceOverview> {
        if self.fail_overview.load(Ordering::SeqCst) {
            return Err(ProviderError::Backend("mock failure".to_string()));
        }
        Ok(*self.overview.lock().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_tracks_search_calls() {
        let provider = MockProvider::new();
        assert_eq!(provider.post_search_calls(), 0);

        provider.search_image_posts("katze", 0).await.unwrap();
        provider.search_image_posts("katze", 40).await.unwrap();
        provider.search_comments("katze", 0).await.unwrap();

        assert_eq!(provider.post_search_calls(), 2);
        assert_eq!(provider.comment_search_calls(), 1);
    }

    #[tokio::test]
    async fn failing_overview_leaves_searches_working() {
        let provider = MockProvider::new().failing_overview();

        assert!(provider.instance_overview().await.is_err());
        assert!(provider.search_comments("katze", 0).await.is_ok());
    }
}
