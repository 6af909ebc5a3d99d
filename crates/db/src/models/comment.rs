//! Comment models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use teamwiki_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: DbId,
    pub page_id: DbId,
    pub author_id: DbId,
    pub parent_id: Option<DbId>,
    pub content: String,
    pub created_at: Timestamp,
}

/// Comment author projection: id and display name only.
#[derive(Debug, Clone, Serialize)]
pub struct CommentAuthor {
    pub id: DbId,
    pub name: String,
}

/// A comment with its author, as listed under a page.
#[derive(Debug, Clone, Serialize)]
pub struct CommentWithAuthor {
    #[serde(flatten)]
    pub comment: Comment,
    pub author: CommentAuthor,
}

/// Flat join row backing [`CommentWithAuthor`].
#[derive(Debug, FromRow)]
pub struct CommentAuthorRow {
    pub id: DbId,
    pub page_id: DbId,
    pub author_id: DbId,
    pub parent_id: Option<DbId>,
    pub content: String,
    pub created_at: Timestamp,
    pub author_name: String,
}

impl From<CommentAuthorRow> for CommentWithAuthor {
    fn from(row: CommentAuthorRow) -> Self {
        Self {
            author: CommentAuthor {
                id: row.author_id,
                name: row.author_name,
            },
            comment: Comment {
                id: row.id,
                page_id: row.page_id,
                author_id: row.author_id,
                parent_id: row.parent_id,
                content: row.content,
                created_at: row.created_at,
            },
        }
    }
}

/// Body of `POST /comments/{page_id}`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub content: String,
    pub parent_id: Option<DbId>,
}
