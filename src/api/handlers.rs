use axum::Json;
use axum::extract::{Query, State};

use super::AppState;
use super::dto::{SearchParams, SearchResponse, SortResponse};
use super::error::ApiError;

// =============================================================================
// Search Handler
// =============================================================================

/// `GET /search?title=<query>`
///
/// Sorts the current collection and looks the title up case-insensitively. The query is
/// taken as raw pairs so a repeated `title` searches the first value instead of failing
/// deserialization.
pub async fn search_title(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = SearchParams::from_pairs(pairs).title.unwrap_or_default();
    let video = state.store().find(&query)?;

    Ok(Json(SearchResponse::found(video)))
}

// =============================================================================
// Sort Handler
// =============================================================================

/// `GET /sort`
pub async fn sort_titles(State(state): State<AppState>) -> Json<SortResponse> {
    let videos = state.store().sorted().into_vec();
    tracing::debug!(count = videos.len(), "Sorted titles");

    Json(SortResponse::sorted(videos))
}
