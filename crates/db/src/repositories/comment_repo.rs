//! Repository for the `comments` table.

use sqlx::PgPool;
use teamwiki_core::types::DbId;

use crate::models::comment::{Comment, CommentAuthorRow, CommentWithAuthor};

const COLUMNS: &str = "id, page_id, author_id, parent_id, content, created_at";

pub struct CommentRepo;

impl CommentRepo {
    pub async fn create(
        pool: &PgPool,
        page_id: DbId,
        author_id: DbId,
        parent_id: Option<DbId>,
        content: &str,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (page_id, author_id, parent_id, content)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(page_id)
            .bind(author_id)
            .bind(parent_id)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether `author_id` already posted exactly `content` on the page.
    pub async fn exists_with_content(
        pool: &PgPool,
        page_id: DbId,
        author_id: DbId,
        content: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (
                SELECT 1 FROM comments
                WHERE page_id = $1 AND author_id = $2 AND content = $3)",
        )
        .bind(page_id)
        .bind(author_id)
        .bind(content)
        .fetch_one(pool)
        .await
    }

    /// Comments on a page with their author, oldest first so threads read
    /// top to bottom.
    pub async fn list_by_page(
        pool: &PgPool,
        page_id: DbId,
    ) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
        let rows = sqlx::query_as::<_, CommentAuthorRow>(
            "SELECT c.id, c.page_id, c.author_id, c.parent_id, c.content, c.created_at,
                    u.name AS author_name
             FROM comments c
             JOIN users u ON u.id = c.author_id
             WHERE c.page_id = $1
             ORDER BY c.created_at ASC, c.id ASC",
        )
        .bind(page_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(CommentWithAuthor::from).collect())
    }

    pub async fn count_by_author(pool: &PgPool, author_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(pool)
            .await
    }
}
