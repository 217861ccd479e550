use std::sync::Arc;

use crate::domain::CounterStore;
use crate::provider::SearchProvider;
use crate::services::{SearchCache, SearchService, StatsService};

/// Shared handles available to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub search_service: SearchService,
    pub stats_service: StatsService,
}

impl AppState {
    pub fn new(provider: Arc<dyn SearchProvider>, counters: CounterStore) -> Self {
        Self {
            search_service: SearchService::new(
                provider.clone(),
                SearchCache::new(),
                counters.clone(),
            ),
            stats_service: StatsService::new(provider, counters),
        }
    }
}
