use serde::{Deserialize, Serialize};

/// Fixed author shown for every comment hit. Real author names stay inside
/// the service.
pub const COMMENT_AUTHOR_PLACEHOLDER: &str = "Ein Nutzer";

/// An image post as stored in the `image_posts` index. Served to clients
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostHit {
    pub id: i64,
    pub author: String,
    pub thumb_url: String,
    /// Content rating as stored upstream: "1" sfw, "2" nsfw, "4" nsfl,
    /// "8" nsfp. Kept as a string so unknown future flags pass through.
    pub sfw_flag: String,
    pub promoted: i64,
    pub created_at: i64,
    pub up: i64,
    pub down: i64,
}

/// A comment as stored in the `comments` index. Only ever deserialized;
/// clients get the redacted [`CommentHit`] instead.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommentDocument {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    pub created_at: i64,
    pub up: i64,
    pub down: i64,
}

/// A comment hit as served to clients. Carries no comment content, and the
/// author is always [`COMMENT_AUTHOR_PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentHit {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    pub created_at: i64,
    pub up: i64,
    pub down: i64,
}

impl From<CommentDocument> for CommentHit {
    fn from(doc: CommentDocument) -> Self {
        Self {
            id: doc.id,
            post_id: doc.post_id,
            author: COMMENT_AUTHOR_PLACEHOLDER.to_string(),
            created_at: doc.created_at,
            up: doc.up,
            down: doc.down,
        }
    }
}

/// One hit page exactly as the search backend returned it, before shaping.
#[derive(Debug, Clone)]
pub struct ProviderPage<T> {
    pub hits: Vec<T>,
    pub limit: u32,
    pub total: u64,
    pub offset: i64,
    pub query_time_ms: u64,
}

impl<T> ProviderPage<T> {
    /// Transform every hit while keeping the paging fields, e.g. for
    /// redaction at the trust boundary.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ProviderPage<U> {
        ProviderPage {
            hits: self.hits.into_iter().map(f).collect(),
            limit: self.limit,
            total: self.total,
            offset: self.offset,
            query_time_ms: self.query_time_ms,
        }
    }
}

/// One page of search results as served to clients and stored in the result
/// cache. Hit order is the backend's relevance order and is never changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchPage<T> {
    pub success: bool,
    pub term: String,
    pub hits: Vec<T>,
    pub limit: u32,
    pub total: u64,
    pub offset: i64,
    #[serde(rename = "qt")]
    pub query_time_ms: u64,
}

impl<T> SearchPage<T> {
    /// Shape a backend page into the stable response contract.
    pub fn from_provider(term: impl Into<String>, page: ProviderPage<T>) -> Self {
        Self {
            success: true,
            term: term.into(),
            hits: page.hits,
            limit: page.limit,
            total: page.total,
            offset: page.offset,
            query_time_ms: page.query_time_ms,
        }
    }
}
