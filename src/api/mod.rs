use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub mod search;

/// Build the HTTP surface. The page at `/` calls `/search` on the same
/// origin, so no CORS layer is installed.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(serve_index))
        .route("/health", get(health))
        .route("/search", get(search::search))
        .with_state(state)
}

async fn serve_index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

async fn health() -> &'static str {
    "OK"
}
