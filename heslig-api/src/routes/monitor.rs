use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(monitor))
}

#[derive(Serialize)]
struct MonitorResponse {
    ok: bool,
}

/// Liveness probe for external monitoring.
async fn monitor() -> Json<MonitorResponse> {
    Json(MonitorResponse { ok: true })
}
