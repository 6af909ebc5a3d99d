//! Page models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use teamwiki_core::types::{DbId, Timestamp};
use validator::Validate;

use crate::models::tag::Tag;
use crate::models::user::AuthorSummary;

/// A row from the `pages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: DbId,
    pub title: String,
    /// Rich-text HTML, stored and returned verbatim.
    pub content: String,
    pub author_id: DbId,
    pub parent_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A page with its author and tags, as returned by list and search.
#[derive(Debug, Clone, Serialize)]
pub struct PageDetail {
    #[serde(flatten)]
    pub page: Page,
    pub author: AuthorSummary,
    pub tags: Vec<Tag>,
}

/// Body of `POST /pages`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageRequest {
    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: String,
    pub parent_id: Option<DbId>,
    #[serde(default)]
    pub tag_names: Vec<String>,
}

/// Body of `PUT /pages/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePageRequest {
    #[validate(length(min = 2, message = "must be at least 2 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: String,
}

/// Insert DTO for a page row.
#[derive(Debug)]
pub struct CreatePage<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub author_id: DbId,
    pub parent_id: Option<DbId>,
}

/// Filters for page search. `None` means "do not filter".
#[derive(Debug, Default)]
pub struct PageFilter {
    pub text: Option<String>,
    pub tag: Option<String>,
}
