use axum::routing::get;
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// Comment routes, registered as `/comments`.
///
/// ```text
/// GET  /{page_id}  list_comments
/// POST /{page_id}  create_comment
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{page_id}",
        get(comments::list_comments).post(comments::create_comment),
    )
}
