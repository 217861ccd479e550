use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::{app_state::AppState, services::stats::StatsSnapshot};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(stats))
}

/// Best-effort aggregate: sub-queries that fail contribute zero values, so
/// this endpoint answers 200 even when the search backend is down.
#[instrument(name = "GET /stats", skip(app_state))]
async fn stats(State(app_state): State<AppState>) -> Json<StatsSnapshot> {
    Json(app_state.stats_service.snapshot().await)
}
