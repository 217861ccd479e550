use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{error, info};

use super::SearchCategory;

const PERSIST_INTERVAL: std::time::Duration = std::time::Duration::from_secs(10 * 60);

#[derive(Debug, thiserror::Error)]
pub enum CounterStoreError {
    #[error("Failed to access stats file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stats file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Point-in-time view of the per-category usage counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterSnapshot {
    pub image_posts: u64,
    pub comments: u64,
}

/// Process-wide usage counters, persisted as a small JSON file.
///
/// Increments are lock-free and counted per accepted request, regardless of
/// whether the result comes from the cache. Persistence works on a snapshot
/// and never blocks request handling; a crash loses at most the increments
/// since the last save.
#[derive(Debug, Clone)]
pub struct CounterStore {
    image_posts: Arc<AtomicU64>,
    comments: Arc<AtomicU64>,
    file: Arc<PathBuf>,
}

impl CounterStore {
    /// Load counters from the stats file. A missing file starts both
    /// counters at zero.
    pub async fn load(file: impl Into<PathBuf>) -> Result<Self, CounterStoreError> {
        let file = file.into();

        let snapshot = match fs::read_to_string(&file).await {
            Ok(contents) => {
                let snapshot: CounterSnapshot = serde_json::from_str(&contents)?;
                info!(
                    "Loaded query stats from {}: {} post queries, {} comment queries",
                    file.display(),
                    snapshot.image_posts,
                    snapshot.comments
                );
                snapshot
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => CounterSnapshot {
                image_posts: 0,
                comments: 0,
            },
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            image_posts: Arc::new(AtomicU64::new(snapshot.image_posts)),
            comments: Arc::new(AtomicU64::new(snapshot.comments)),
            file: Arc::new(file),
        })
    }

    pub fn increment(&self, category: SearchCategory) {
        let counter = match category {
            SearchCategory::ImagePosts => &self.image_posts,
            SearchCategory::Comments => &self.comments,
        };
        counter.fetch_add(1, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            image_posts: self.image_posts.load(Ordering::SeqCst),
            comments: self.comments.load(Ordering::SeqCst),
        }
    }

    /// Write the current snapshot to the stats file.
    pub async fn persist(&self) -> Result<(), CounterStoreError> {
        let contents = serde_json::to_string(&self.snapshot())?;
        fs::write(self.file.as_ref(), contents).await?;
        info!("Query stats saved to {}", self.file.display());
        Ok(())
    }

    /// Persist on a fixed interval. Failures are logged and retried on the
    /// next tick.
    pub fn start_persist_task(&self) -> tokio::task::JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(PERSIST_INTERVAL);
            loop {
                interval.tick().await;
                if let Err(e) = store.persist().await {
                    error!("Failed to persist query stats: {}", e);
                }
            }
        })
    }
}
