//! Notification model.

use serde::Serialize;
use sqlx::FromRow;
use teamwiki_core::types::{DbId, Timestamp};

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    pub message: String,
    pub read: bool,
    pub created_at: Timestamp,
}
