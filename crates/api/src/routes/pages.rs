//! Route definitions for the `/pages` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Page routes, registered as `/pages`.
///
/// ```text
/// GET    /                          list_pages
/// POST   /                          create_page
/// GET    /{id}                      get_page
/// PUT    /{id}                      update_page
/// DELETE /{id}                      delete_page
/// GET    /{id}/versions             list_versions
/// GET    /{id}/versions/{version}   get_version
/// POST   /{id}/restore/{version}    restore_version
/// GET    /{id}/diff                 diff_versions
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::list_pages).post(pages::create_page))
        .route(
            "/{id}",
            get(pages::get_page)
                .put(pages::update_page)
                .delete(pages::delete_page),
        )
        .route("/{id}/versions", get(pages::list_versions))
        .route("/{id}/versions/{version}", get(pages::get_version))
        .route("/{id}/restore/{version}", post(pages::restore_version))
        .route("/{id}/diff", get(pages::diff_versions))
}
