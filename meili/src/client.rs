use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

use crate::{
    domain::{IndexSettings, IndexStats, InstanceStats, SearchParams, SearchResponse},
    MeiliUrl,
};

const API_KEY_HEADER: &str = "X-Meili-API-Key";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct MeiliClient {
    http: reqwest::Client,
    base_url: MeiliUrl,
    api_key: Option<String>,
}

impl MeiliClient {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Result<Self, MeiliError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| MeiliError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: MeiliUrl::new(endpoint),
            api_key,
        })
    }

    fn get(&self, url: impl AsRef<str>) -> reqwest::RequestBuilder {
        self.with_auth(self.http.get(url.as_ref()))
    }

    fn post(&self, url: impl AsRef<str>) -> reqwest::RequestBuilder {
        self.with_auth(self.http.post(url.as_ref()))
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.header(API_KEY_HEADER, key),
            None => request,
        }
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, MeiliError> {
        let resp = request
            .send()
            .await
            .map_err(|e| MeiliError::ResponseError(e.to_string()))?;

        if resp.status() == 401 || resp.status() == 403 {
            return Err(MeiliError::Unauthorized);
        }
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(MeiliError::ResponseError(format!("{}: {}", status, body)));
        }

        Ok(resp)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, MeiliError> {
        let resp = self.send(request).await?;

        resp.json::<T>().await.map_err(|e| {
            MeiliError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })
    }

    async fn send_without_body(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(), MeiliError> {
        let resp = self.send(request).await?;
        let _ = resp.bytes().await;
        Ok(())
    }

    /// Run a search against a single index. `T` is the document type stored
    /// in that index.
    pub async fn search<T: DeserializeOwned>(
        &self,
        index_uid: &str,
        term: &str,
        params: &SearchParams,
    ) -> Result<SearchResponse<T>, MeiliError> {
        let url = self.base_url.index_route(index_uid, "search");

        let mut query: Vec<(&str, String)> = vec![
            ("q", term.to_string()),
            ("offset", params.offset.to_string()),
        ];
        if let Some(limit) = params.limit {
            query.push(("limit", limit.to_string()));
        }

        self.fetch(self.get(url).query(&query)).await
    }

    pub async fn index_stats(&self, index_uid: &str) -> Result<IndexStats, MeiliError> {
        let url = self.base_url.index_route(index_uid, "stats");
        self.fetch(self.get(url)).await
    }

    pub async fn instance_stats(&self) -> Result<InstanceStats, MeiliError> {
        let url = self.base_url.append_path("/stats");
        self.fetch(self.get(url)).await
    }

    /// Liveness probe against `GET /health`.
    pub async fn health(&self) -> Result<(), MeiliError> {
        let url = self.base_url.append_path("/health");
        self.send_without_body(self.get(url)).await
    }

    pub async fn create_index(&self, uid: &str, primary_key: &str) -> Result<(), MeiliError> {
        let url = self.base_url.append_path("/indexes");
        self.send_without_body(self.post(url).json(&CreateIndexRequest { uid, primary_key }))
            .await
    }

    pub async fn update_settings(
        &self,
        index_uid: &str,
        settings: &IndexSettings,
    ) -> Result<(), MeiliError> {
        let url = self.base_url.index_route(index_uid, "settings");
        self.send_without_body(self.post(url).json(settings)).await
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateIndexRequest<'a> {
    uid: &'a str,
    primary_key: &'a str,
}

#[derive(Error, Debug)]
pub enum MeiliError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
    #[error("Other: {0}")]
    Other(String),
}
