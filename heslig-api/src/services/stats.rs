//! Aggregated numbers for the public stats endpoint.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use tracing::warn;

use crate::domain::{CounterSnapshot, CounterStore};
use crate::provider::SearchProvider;

const SNAPSHOT_TTL: Duration = Duration::from_secs(60);

/// Document counts per index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryCounts {
    pub image_posts: u64,
    pub comments: u64,
}

/// The public stats payload: index sizes, backend size and freshness, and
/// the usage counters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub entries: EntryCounts,
    pub database_size: u64,
    #[serde(with = "time::serde::rfc3339")]
    pub last_update: OffsetDateTime,
    pub query_count: CounterSnapshot,
}

/// Aggregates backend stats and usage counters, cached for a short TTL.
///
/// The three backend sub-queries run concurrently and fail independently;
/// a failed sub-query contributes zero values instead of failing the whole
/// snapshot.
#[derive(Clone)]
pub struct StatsService {
    provider: Arc<dyn SearchProvider>,
    counters: CounterStore,
    cached: Arc<RwLock<Option<(Instant, StatsSnapshot)>>>,
    ttl: Duration,
}

impl StatsService {
    pub fn new(provider: Arc<dyn SearchProvider>, counters: CounterStore) -> Self {
        Self::with_ttl(provider, counters, SNAPSHOT_TTL)
    }

    pub fn with_ttl(
        provider: Arc<dyn SearchProvider>,
        counters: CounterStore,
        ttl: Duration,
    ) -> Self {
        Self {
            provider,
            counters,
            cached: Arc::new(RwLock::new(None)),
            ttl,
        }
    }

    pub async fn snapshot(&self) -> StatsSnapshot {
        if let Some((built_at, snapshot)) = self.cached.read().await.as_ref() {
            if built_at.elapsed() < self.ttl {
                return snapshot.clone();
            }
        }

        let snapshot = self.build_snapshot().await;
        *self.cached.write().await = Some((Instant::now(), snapshot.clone()));

        snapshot
    }

    async fn build_snapshot(&self) -> StatsSnapshot {
        let (image_posts, comments, overview) = tokio::join!(
            self.provider.image_post_count(),
            self.provider.comment_count(),
            self.provider.instance_overview(),
        );

        let image_posts = image_posts.unwrap_or_else(|e| {
            warn!("Image post count unavailable: {}", e);
            0
        });
        let comments = comments.unwrap_or_else(|e| {
            warn!("Comment count unavailable: {}", e);
            0
        });
        let (database_size, last_update) = match overview {
            Ok(overview) => (
                overview.database_size,
                overview.last_update.unwrap_or(OffsetDateTime::UNIX_EPOCH),
            ),
            Err(e) => {
                warn!("Instance stats unavailable: {}", e);
                (0, OffsetDateTime::UNIX_EPOCH)
            }
        };

        StatsSnapshot {
            entries: EntryCounts {
                image_posts,
                comments,
            },
            database_size,
            last_update,
            query_count: self.counters.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SearchCategory;
    use crate::provider::{InstanceOverview, MockProvider};
    use time::macros::datetime;

    async fn counters() -> CounterStore {
        let dir = tempfile::tempdir().unwrap();
        CounterStore::load(dir.path().join("stats.json"))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn combines_backend_stats_with_usage_counters() {
        let provider = MockProvider::new()
            .with_document_counts(19654, 1_500_000)
            .with_overview(InstanceOverview {
                database_size: 447_819_776,
                last_update: Some(datetime!(2026-08-20 11:15:22 UTC)),
            });
        let counters = counters().await;
        counters.increment(SearchCategory::ImagePosts);
        counters.increment(SearchCategory::ImagePosts);
        counters.increment(SearchCategory::Comments);

        let service = StatsService::new(Arc::new(provider), counters);
        let snapshot = service.snapshot().await;

        assert_eq!(snapshot.entries.image_posts, 19654);
        assert_eq!(snapshot.entries.comments, 1_500_000);
        assert_eq!(snapshot.database_size, 447_819_776);
        assert_eq!(snapshot.last_update.year(), 2026);
        assert_eq!(snapshot.query_count.image_posts, 2);
        assert_eq!(snapshot.query_count.comments, 1);
    }

    #[tokio::test]
    async fn instance_stats_failure_zeroes_size_and_timestamp_only() {
        let provider = MockProvider::new()
            .with_document_counts(40, 7)
            .failing_overview();
        let service = StatsService::new(Arc::new(provider), counters().await);

        let snapshot = service.snapshot().await;

        assert_eq!(snapshot.entries.image_posts, 40);
        assert_eq!(snapshot.entries.comments, 7);
        assert_eq!(snapshot.database_size, 0);
        assert_eq!(snapshot.last_update, OffsetDateTime::UNIX_EPOCH);
    }

    #[tokio::test]
    async fn count_failures_default_to_zero_entries() {
        let provider = MockProvider::new()
            .failing_counts()
            .with_overview(InstanceOverview {
                database_size: 1024,
                last_update: None,
            });
        let service = StatsService::new(Arc::new(provider), counters().await);

        let snapshot = service.snapshot().await;

        assert_eq!(snapshot.entries.image_posts, 0);
        assert_eq!(snapshot.entries.comments, 0);
        assert_eq!(snapshot.database_size, 1024);
        // A backend that has never indexed reports no update time.
        assert_eq!(snapshot.last_update, OffsetDateTime::UNIX_EPOCH);
    }

    #[tokio::test]
    async fn snapshots_are_cached_within_the_ttl() {
        let counters = counters().await;
        let service = StatsService::new(Arc::new(MockProvider::new()), counters.clone());

        let first = service.snapshot().await;
        counters.increment(SearchCategory::Comments);
        let second = service.snapshot().await;

        // Still the cached snapshot from before the increment.
        assert_eq!(second.query_count.comments, first.query_count.comments);
    }

    #[tokio::test]
    async fn expired_snapshots_are_rebuilt() {
        let counters = counters().await;
        let service = StatsService::with_ttl(
            Arc::new(MockProvider::new()),
            counters.clone(),
            Duration::ZERO,
        );

        service.snapshot().await;
        counters.increment(SearchCategory::Comments);
        let rebuilt = service.snapshot().await;

        assert_eq!(rebuilt.query_count.comments, 1);
    }

    #[tokio::test]
    async fn serializes_to_the_public_contract() {
        let provider = MockProvider::new()
            .with_document_counts(2, 3)
            .with_overview(InstanceOverview {
                database_size: 99,
                last_update: Some(datetime!(2026-01-01 0:00 UTC)),
            });
        let service = StatsService::new(Arc::new(provider), counters().await);

        let json = serde_json::to_value(service.snapshot().await).unwrap();

        assert_eq!(json["entries"]["imagePosts"], 2);
        assert_eq!(json["entries"]["comments"], 3);
        assert_eq!(json["databaseSize"], 99);
        assert_eq!(json["queryCount"]["imagePosts"], 0);
        assert_eq!(json["lastUpdate"], "2026-01-01T00:00:00Z");
    }
}
