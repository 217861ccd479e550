use std::collections::HashMap;

use serde::Deserialize;
use time::OffsetDateTime;

/// Response of `GET /indexes/:uid/stats`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexStats {
    pub number_of_documents: u64,
    #[serde(default)]
    pub is_indexing: bool,
    #[serde(default)]
    pub fields_distribution: HashMap<String, u64>,
}

/// Response of `GET /stats`. `last_update` is null on a fresh instance that
/// has never processed an update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceStats {
    pub database_size: u64,
    #[serde(with = "time::serde::rfc3339::option", default)]
    pub last_update: Option<OffsetDateTime>,
    #[serde(default)]
    pub indexes: HashMap<String, IndexStats>,
}
