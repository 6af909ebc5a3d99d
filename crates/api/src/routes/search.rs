use axum::routing::get;
use axum::Router;

use crate::handlers::search;
use crate::state::AppState;

/// Search routes, registered as `/search`.
///
/// ```text
/// GET /?q=&tag=  search_pages
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(search::search_pages))
}
