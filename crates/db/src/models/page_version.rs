//! Page version model.
//!
//! Versions are immutable snapshots of a page's title and content, written on
//! every create, update and restore.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use teamwiki_core::diff::LineChange;
use teamwiki_core::types::{DbId, Timestamp};

/// A row from the `page_versions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageVersion {
    pub id: DbId,
    pub page_id: DbId,
    pub version: i32,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
}

/// Query params for comparing two versions.
#[derive(Debug, Deserialize)]
pub struct DiffParams {
    pub from: i32,
    pub to: i32,
}

/// Plain-text comparison of two versions.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDiff {
    pub page_id: DbId,
    pub from: i32,
    pub to: i32,
    pub from_text: String,
    pub to_text: String,
    pub lines: Vec<LineChange>,
}
