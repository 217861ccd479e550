//! Seam to the external full-text search backend.

mod meilisearch;
#[cfg(test)]
mod mock;

pub use meilisearch::MeiliProvider;
#[cfg(test)]
pub use mock::MockProvider;

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::domain::{CommentDocument, PostHit, ProviderPage};

/// Error type for search backend operations.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Search backend rejected the credentials")]
    Unauthorized,

    #[error("Search backend request failed: {0}")]
    Backend(String),
}

impl From<meili::MeiliError> for ProviderError {
    fn from(e: meili::MeiliError) -> Self {
        match e {
            meili::MeiliError::Unauthorized => ProviderError::Unauthorized,
            other => ProviderError::Backend(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;

/// Size and freshness numbers for the whole backend instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceOverview {
    pub database_size: u64,
    pub last_update: Option<OffsetDateTime>,
}

/// Abstracts the search backend for dispatching and testing.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// One fixed-size page of image posts matching `term`.
    async fn search_image_posts(&self, term: &str, offset: i64) -> Result<ProviderPage<PostHit>>;

    /// One page of comments matching `term`, sized by the backend's default
    /// limit.
    async fn search_comments(&self, term: &str, offset: i64)
        -> Result<ProviderPage<CommentDocument>>;

    async fn image_post_count(&self) -> Result<u64>;

    async fn comment_count(&self) -> Result<u64>;

    async fn instance_overview(&self) -> Result<InstanceOverview>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // The provider is held as a trait object in AppState.
    fn _assert_provider_object_safe(_: &dyn SearchProvider) {}

    #[test]
    fn unauthorized_maps_to_its_own_variant() {
        let err = ProviderError::from(meili::MeiliError::Unauthorized);
        assert!(matches!(err, ProviderError::Unauthorized));

        let err = ProviderError::from(meili::MeiliError::ResponseError("500".to_string()));
        assert!(matches!(err, ProviderError::Backend(_)));
    }
}
