//! Handlers for the caller's own notifications.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use teamwiki_core::types::DbId;
use teamwiki_db::models::notification::Notification;
use teamwiki_db::repositories::NotificationRepo;

use crate::error::AppResult;
use crate::extract::Path;
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MarkReadResponse {
    /// 1 if the notification was the caller's, 0 otherwise.
    pub updated: u64,
}

#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub count: i64,
}

/// GET /notifications
pub async fn list_notifications(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Notification>>> {
    let notifications = NotificationRepo::list_for_user(&state.pool, user.user_id).await?;
    Ok(Json(notifications))
}

/// POST /notifications/{id}/read
///
/// Someone else's id is not an error: nothing changes and `updated` is 0.
pub async fn mark_read(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MarkReadResponse>> {
    let updated = NotificationRepo::mark_read(&state.pool, id, user.user_id).await?;
    tracing::debug!(user_id = user.user_id, notification_id = id, updated, "Mark read");
    Ok(Json(MarkReadResponse { updated }))
}

/// GET /notifications/unread-count
pub async fn unread_count(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<UnreadCountResponse>> {
    let count = NotificationRepo::unread_count(&state.pool, user.user_id).await?;
    Ok(Json(UnreadCountResponse { count }))
}
