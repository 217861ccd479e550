pub mod dispatcher;
pub mod search_cache;
pub mod stats;

pub use dispatcher::SearchService;
pub use search_cache::SearchCache;
pub use stats::StatsService;
