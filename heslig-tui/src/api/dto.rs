//! Wire types for the heslig-api responses.

use serde::Deserialize;
use time::OffsetDateTime;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// One page of search results as served by `/search/*`. Hits arrive in the
/// backend's relevance order and are kept in that order.
#[derive(Debug, Clone, Deserialize)]
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

#[derive(Debug, Clone, Deserialize)]
pub struct PostHit {
    pub id: i64,
    pub author: String,
    pub thumb_url: String,
    /// "1" sfw, "2" nsfw, "4" nsfl, "8" nsfp.
    pub sfw_flag: String,
    pub promoted: i64,
    pub created_at: i64,
    pub up: i64,
    pub down: i64,
}

impl PostHit {
    pub fn permalink(&self) -> String {
        format!("https://pr0gramm.com/new/{}", self.id)
    }

    pub fn sfw_label(&self) -> &'static str {
        match self.sfw_flag.as_str() {
            "1" => "sfw",
            "2" => "nsfw",
            "4" => "nsfl",
            "8" => "nsfp",
            _ => "???",
        }
    }
}

/// A comment hit. The server redacts the author and never sends comment
/// content at all.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentHit {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    pub created_at: i64,
    pub up: i64,
    pub down: i64,
}

impl CommentHit {
    pub fn permalink(&self) -> String {
        format!("https://pr0gramm.com/new/{}:comment{}", self.post_id, self.id)
    }

    pub fn post_permalink(&self) -> String {
        format!("https://pr0gramm.com/new/{}", self.post_id)
    }

    pub fn benis(&self) -> i64 {
        self.up - self.down
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryCounts {
    pub image_posts: u64,
    pub comments: u64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryCounts {
    pub image_posts: u64,
    pub comments: u64,
}

/// The `/stats` payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub entries: EntryCounts,
    pub database_size: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub last_update: OffsetDateTime,
    pub query_count: QueryCounts,
}

impl Stats {
    /// Number of submitted searches. Every submission fires one query per
    /// category, so the raw counters count each search twice.
    pub fn submitted_searches(&self) -> u64 {
        (self.query_count.image_posts + self.query_count.comments) / 2
    }

    /// Database size in GiB, truncated to one decimal.
    pub fn database_gib(&self) -> f64 {
        (self.database_size as f64 / GIB * 10.0).floor() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_page_deserializes_from_wire_shape() {
        let json = r#"{
            "success": true,
            "term": "katze",
            "hits": [
                {
                    "id": 4396430,
                    "author": "gamb",
                    "thumb_url": "2021/05/07/abc123.jpg",
                    "sfw_flag": "1",
                    "promoted": 0,
                    "created_at": 1620400000,
                    "up": 540,
                    "down": 21
                }
            ],
            "limit": 40,
            "total": 47,
            "offset": 0,
            "qt": 3
        }"#;

        let page: SearchPage<PostHit> = serde_json::from_str(json).unwrap();
        assert!(page.success);
        assert_eq!(page.term, "katze");
        assert_eq!(page.hits.len(), 1);
        assert_eq!(page.limit, 40);
        assert_eq!(page.total, 47);
        assert_eq!(page.query_time_ms, 3);
    }

    #[test]
    fn sfw_flags_map_to_labels() {
        let mut hit = PostHit {
            id: 1,
            author: "gamb".to_string(),
            thumb_url: String::new(),
            sfw_flag: "1".to_string(),
            promoted: 0,
            created_at: 0,
            up: 0,
            down: 0,
        };
        assert_eq!(hit.sfw_label(), "sfw");
        hit.sfw_flag = "2".to_string();
        assert_eq!(hit.sfw_label(), "nsfw");
        hit.sfw_flag = "4".to_string();
        assert_eq!(hit.sfw_label(), "nsfl");
        hit.sfw_flag = "8".to_string();
        assert_eq!(hit.sfw_label(), "nsfp");
        hit.sfw_flag = "16".to_string();
        assert_eq!(hit.sfw_label(), "???");
    }

    #[test]
    fn comment_permalink_points_at_comment_on_post() {
        let hit = CommentHit {
            id: 48636732,
            post_id: 4586153,
            author: "Ein Nutzer".to_string(),
            created_at: 0,
            up: 12,
            down: 3,
        };
        assert_eq!(
            hit.permalink(),
            "https://pr0gramm.com/new/4586153:comment48636732"
        );
        assert_eq!(hit.benis(), 9);
    }

    #[test]
    fn stats_deserialize_and_derive_display_values() {
        let json = r#"{
            "entries": {"imagePosts": 520000, "comments": 3100000},
            "databaseSize": 2791728742,
            "lastUpdate": "2021-05-07T12:00:00Z",
            "queryCount": {"imagePosts": 101, "comments": 101}
        }"#;

        let stats: Stats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.entries.image_posts, 520_000);
        assert_eq!(stats.submitted_searches(), 101);
        assert_eq!(stats.database_gib(), 2.6);
    }
}
