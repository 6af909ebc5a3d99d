//! Handler for the per-user dashboard summary.

use axum::extract::State;
use axum::Json;
use teamwiki_core::pages::{DASHBOARD_RECENT_PAGES, DASHBOARD_UNREAD_LIMIT};
use teamwiki_db::models::dashboard::DashboardSummary;
use teamwiki_db::repositories::{CommentRepo, NotificationRepo, PageRepo};

use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

/// GET /dashboard
///
/// The four aggregates are independent and run concurrently.
pub async fn get_dashboard(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DashboardSummary>> {
    let pool = &state.pool;
    let (recent_pages, my_pages_count, my_comments_count, unread_notifications) = tokio::try_join!(
        PageRepo::list_recent(pool, DASHBOARD_RECENT_PAGES),
        PageRepo::count_by_author(pool, user.user_id),
        CommentRepo::count_by_author(pool, user.user_id),
        NotificationRepo::list_unread(pool, user.user_id, DASHBOARD_UNREAD_LIMIT),
    )?;

    Ok(Json(DashboardSummary {
        recent_pages,
        my_pages_count,
        my_comments_count,
        unread_notifications,
    }))
}
