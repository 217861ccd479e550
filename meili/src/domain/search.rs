use serde::{Deserialize, Serialize};

/// Pagination parameters for a search request. MeiliSearch applies its own
/// default limit when none is given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub offset: i64,
    pub limit: Option<u32>,
}

impl SearchParams {
    pub fn at_offset(offset: i64) -> Self {
        Self {
            offset,
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Response of `GET /indexes/:uid/search`, generic over the document type
/// stored in the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse<T> {
    pub hits: Vec<T>,
    pub offset: i64,
    pub limit: u32,
    pub nb_hits: u64,
    #[serde(default)]
    pub exhaustive_nb_hits: bool,
    pub processing_time_ms: u64,
    pub query: String,
}
