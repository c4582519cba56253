use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::models::{ErrorBody, SearchResult};
use crate::state::AppState;

/// GET /search?q=... - Keyword resolution with fallback, then repository
/// search. A missing `q` searches the configured default query; a blank
/// one returns an empty result.
///
/// Parameters are taken as raw pairs so a repeated or unknown key never
/// turns into a 400; the first `q` wins.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<SearchResult>, (StatusCode, Json<ErrorBody>)> {
    let query =
        first_query(&params).unwrap_or_else(|| state.config.default_query.clone());

    match state.search.perform_search(&query).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                error: "Failed to search repositories".to_string(),
                message: e.to_string(),
            }),
        )),
    }
}

fn first_query(params: &[(String, String)]) -> Option<String> {
    params
        .iter()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.clone())
}
