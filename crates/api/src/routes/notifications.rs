//! Route definitions for the caller's notifications.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::notifications;
use crate::state::AppState;

/// Notification routes, registered as `/notifications`.
///
/// ```text
/// GET  /              list_notifications
/// GET  /unread-count  unread_count
/// POST /{id}/read     mark_read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notifications::list_notifications))
        .route("/unread-count", get(notifications::unread_count))
        .route("/{id}/read", post(notifications::mark_read))
}
