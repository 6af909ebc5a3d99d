//! Dashboard aggregate models.

use serde::Serialize;
use sqlx::FromRow;
use teamwiki_core::types::{DbId, Timestamp};

use crate::models::notification::Notification;

/// Minimal page projection for the "recently updated" list.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentPage {
    pub id: DbId,
    pub title: String,
    pub updated_at: Timestamp,
}

/// Response of `GET /dashboard`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub recent_pages: Vec<RecentPage>,
    pub my_pages_count: i64,
    pub my_comments_count: i64,
    pub unread_notifications: Vec<Notification>,
}
