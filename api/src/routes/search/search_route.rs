//! POST /search — filtered semantic search over the configured collection.

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, info};
use vector_search::{MatchFilter, RESULT_LIMIT, SearchQuery};

use crate::{
    core::app_state::AppState,
    error_handler::AppResult,
    routes::search::{search_request::SearchRequest, search_response::SearchResult},
};

/// Field every stored record is filtered on.
const CONTENT_TYPE_FIELD: &str = "content_type";

/// Handler: POST /search
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/search \
///   -H 'content-type: application/json' \
///   -d '{"query":"rust async runtimes","content_type":"text"}'
/// ```
pub async fn search_route(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> AppResult<Json<Vec<SearchResult>>> {
    let Json(body) = payload?;
    let (query, content_type) = body.into_parts()?;

    let collection = state.config.search.qdrant.collection.as_str();
    debug!(
        collection,
        query_chars = query.chars().count(),
        content_type = %content_type,
        "search_route: start"
    );

    let matches = state
        .search
        .query(SearchQuery {
            collection,
            text: &query,
            limit: RESULT_LIMIT,
            filter: MatchFilter::equals(CONTENT_TYPE_FIELD, content_type),
        })
        .await?;

    let results: Vec<SearchResult> = matches
        .into_iter()
        .take(RESULT_LIMIT as usize)
        .map(SearchResult::from)
        .collect();

    info!(hits = results.len(), "search_route: success");
    Ok(Json(results))
}
