//! Tag models.

use serde::Serialize;
use sqlx::FromRow;
use teamwiki_core::types::DbId;

/// A tag as embedded in page responses.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
}

/// A tag joined to the page it is linked to, for batch lookups.
#[derive(Debug, Clone, FromRow)]
pub struct PageTagRow {
    pub page_id: DbId,
    pub id: DbId,
    pub name: String,
}
