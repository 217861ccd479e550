use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    app_state::AppState,
    domain::{CommentHit, PostHit, SearchPage, SearchQuery},
    routes::ApiError,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/image-posts", get(image_posts))
        .route("/comments", get(comments))
}

/// Raw query string values, normalized before anything else happens.
#[derive(Debug, Clone, Deserialize)]
struct RawSearchParams {
    term: Option<String>,
    offset: Option<String>,
}

impl RawSearchParams {
    fn normalized(&self) -> Result<SearchQuery, ApiError> {
        let query = SearchQuery::normalize(
            self.term.as_deref().unwrap_or_default(),
            self.offset.as_deref(),
        )?;
        Ok(query)
    }
}

#[instrument(name = "GET /search/image-posts", skip(app_state))]
async fn image_posts(
    State(app_state): State<AppState>,
    Query(params): Query<RawSearchParams>,
) -> Result<Json<SearchPage<PostHit>>, ApiError> {
    let query = params.normalized()?;
    let page = app_state.search_service.search_image_posts(&query).await?;

    Ok(Json(page))
}

#[instrument(name = "GET /search/comments", skip(app_state))]
async fn comments(
    State(app_state): State<AppState>,
    Query(params): Query<RawSearchParams>,
) -> Result<Json<SearchPage<CommentHit>>, ApiError> {
    let query = params.normalized()?;
    let page = app_state.search_service.search_comments(&query).await?;

    Ok(Json(page))
}
