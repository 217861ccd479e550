use async_trait::async_trait;
use meili::{MeiliClient, SearchParams};

use super::{InstanceOverview, Result, SearchProvider};
use crate::domain::{CommentDocument, PostHit, ProviderPage};

const IMAGE_POSTS_INDEX: &str = "image_posts";
const COMMENTS_INDEX: &str = "comments";

/// One grid page of thumbnails.
const POST_PAGE_LIMIT: u32 = 10 * 4;

/// [`SearchProvider`] backed by a MeiliSearch instance.
#[derive(Debug, Clone)]
pub struct MeiliProvider {
    client: MeiliClient,
}

impl MeiliProvider {
    pub fn new(client: MeiliClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SearchProvider for MeiliProvider {
    async fn search_image_posts(&self, term: &str, offset: i64) -> Result<ProviderPage<PostHit>> {
        let params = SearchParams::at_offset(offset).with_limit(POST_PAGE_LIMIT);
        let response = self
            .client
            .search::<PostHit>(IMAGE_POSTS_INDEX, term, &params)
            .await?;

        Ok(provider_page(response))
    }

    async fn search_comments(
        &self,
        term: &str,
        offset: i64,
    ) -> Result<ProviderPage<CommentDocument>> {
        let params = SearchParams::at_offset(offset);
        let response = self
            .client
            .search::<CommentDocument>(COMMENTS_INDEX, term, &params)
            .await?;

        Ok(provider_page(response))
    }

    async fn image_post_count(&self) -> Result<u64> {
        let stats = self.client.index_stats(IMAGE_POSTS_INDEX).await?;
        Ok(stats.number_of_documents)
    }

    async fn comment_count(&self) -> Result<u64> {
        let stats = self.client.index_stats(COMMENTS_INDEX).await?;
        Ok(stats.number_of_documents)
    }

    async fn instance_overview(&self) -> Result<InstanceOverview> {
        let stats = self.client.instance_stats().await?;
        Ok(InstanceOverview {
            database_size: stats.database_size,
            last_update: stats.last_update,
        })
    }
}

fn provider_page<T>(response: meili::SearchResponse<T>) -> ProviderPage<T> {
    ProviderPage {
        hits: response.hits,
        limit: response.limit,
        total: response.nb_hits,
        offset: response.offset,
        query_time_ms: response.processing_time_ms,
    }
}
