pub mod auth;
pub mod comments;
pub mod dashboard;
pub mod health;
pub mod notifications;
pub mod pages;
pub mod search;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                                   register (public)
/// /auth/login                                      login (public)
///
/// /pages                                           list, create
/// /pages/{id}                                      get, update, delete
/// /pages/{id}/versions                             list versions
/// /pages/{id}/versions/{version}                   get one version
/// /pages/{id}/restore/{version}                    restore (POST)
/// /pages/{id}/diff                                 compare two versions
///
/// /comments/{page_id}                              list, create
///
/// /search                                          text and tag search
///
/// /dashboard                                       caller's overview
///
/// /notifications                                   list caller's notifications
/// /notifications/unread-count                      unread counter
/// /notifications/{id}/read                         mark read (POST)
/// ```
///
/// Everything except `/auth` requires a bearer token; mutations of pages
/// additionally require `ADMIN` or `EDITOR`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/pages", pages::router())
        .nest("/comments", comments::router())
        .nest("/search", search::router())
        .nest("/dashboard", dashboard::router())
        .nest("/notifications", notifications::router())
}
