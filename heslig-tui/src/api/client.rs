use anyhow::{Context, Result};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::api::dto::{CommentHit, PostHit, SearchPage, Stats};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .with_context(|| format!("Invalid API URL: {}", base_url))?;
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("Failed to build URL for path {}", path))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, call_name: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to call {}", call_name))?;

        response
            .error_for_status_ref()
            .with_context(|| format!("{} returned error", call_name))?;

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse {} response", call_name))
    }

    async fn search_page<T: DeserializeOwned>(
        &self,
        path: &str,
        term: &str,
        offset: i64,
        call_name: &str,
    ) -> Result<SearchPage<T>> {
        let mut url = self.endpoint(path)?;
        url.query_pairs_mut()
            .append_pair("term", term)
            .append_pair("offset", &offset.to_string());

        let page: SearchPage<T> = self.get_json(url, call_name).await?;
        if !page.success {
            anyhow::bail!("{} reported failure", call_name);
        }
        Ok(page)
    }

    pub async fn search_image_posts(&self, term: &str, offset: i64) -> Result<SearchPage<PostHit>> {
        self.search_page("/search/image-posts", term, offset, "GET /search/image-posts")
            .await
    }

    pub async fn search_comments(&self, term: &str, offset: i64) -> Result<SearchPage<CommentHit>> {
        self.search_page("/search/comments", term, offset, "GET /search/comments")
            .await
    }

    /// First page for both categories, fetched concurrently. Fails as a
    /// whole if either category fails; there is no partial result.
    pub async fn search_both(
        &self,
        term: &str,
    ) -> Result<(SearchPage<PostHit>, SearchPage<CommentHit>)> {
        let (posts, comments) = tokio::join!(
            self.search_image_posts(term, 0),
            self.search_comments(term, 0),
        );
        Ok((posts?, comments?))
    }

    pub async fn fetch_stats(&self) -> Result<Stats> {
        self.get_json(self.endpoint("/stats")?, "GET /stats").await
    }
}
