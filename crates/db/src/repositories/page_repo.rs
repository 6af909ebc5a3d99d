//! Repository for the `pages` table.
//!
//! Version rows are written by the caller through
//! [`PageVersionRepo`](super::PageVersionRepo); this repository only touches
//! the current page row and its read projections.

use std::collections::HashMap;

use sqlx::{FromRow, PgPool};
use teamwiki_core::search::contains_pattern;
use teamwiki_core::types::{DbId, Timestamp};

use crate::models::dashboard::RecentPage;
use crate::models::page::{CreatePage, Page, PageDetail, PageFilter};
use crate::models::tag::Tag;
use crate::models::user::AuthorSummary;
use crate::repositories::TagRepo;

const COLUMNS: &str = "id, title, content, author_id, parent_id, created_at, updated_at";

/// Page columns qualified with the `p` alias plus the joined author fields.
const DETAIL_COLUMNS: &str = "p.id, p.title, p.content, p.author_id, p.parent_id, \
    p.created_at, p.updated_at, u.name AS author_name, u.email AS author_email";

/// Flat join row for a page and its author.
#[derive(Debug, FromRow)]
struct PageAuthorRow {
    id: DbId,
    title: String,
    content: String,
    author_id: DbId,
    parent_id: Option<DbId>,
    created_at: Timestamp,
    updated_at: Timestamp,
    author_name: String,
    author_email: String,
}

pub struct PageRepo;

impl PageRepo {
    /// Insert a page row. The caller writes version 1 and tag links.
    pub async fn create(pool: &PgPool, input: &CreatePage<'_>) -> Result<Page, sqlx::Error> {
        let query = format!(
            "INSERT INTO pages (title, content, author_id, parent_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(input.title)
            .bind(input.content)
            .bind(input.author_id)
            .bind(input.parent_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE id = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The oldest page with exactly this title.
    pub async fn find_by_title(pool: &PgPool, title: &str) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE title = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, Page>(&query)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite title and content. Returns `None` if the page does not exist.
    pub async fn update_content(
        pool: &PgPool,
        id: DbId,
        title: &str,
        content: &str,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "UPDATE pages SET title = $2, content = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .bind(title)
            .bind(content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a page; versions, tag links and comments cascade.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Pages with author and tags, most recently updated first.
    ///
    /// `filter.text` matches title or content case-insensitively as a
    /// substring; `filter.tag` requires a link to the tag with that exact
    /// name. Both filters combine with AND.
    pub async fn list_detailed(
        pool: &PgPool,
        filter: &PageFilter,
    ) -> Result<Vec<PageDetail>, sqlx::Error> {
        let pattern = filter.text.as_deref().map(contains_pattern);
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM pages p
             JOIN users u ON u.id = p.author_id
             WHERE ($1::TEXT IS NULL OR p.title ILIKE $1 OR p.content ILIKE $1)
               AND ($2::TEXT IS NULL OR EXISTS (
                    SELECT 1 FROM page_tags pt
                    JOIN tags t ON t.id = pt.tag_id
                    WHERE pt.page_id = p.id AND t.name = $2))
             ORDER BY p.updated_at DESC, p.id DESC"
        );
        let rows = sqlx::query_as::<_, PageAuthorRow>(&query)
            .bind(pattern)
            .bind(filter.tag.as_deref())
            .fetch_all(pool)
            .await?;

        let ids: Vec<DbId> = rows.iter().map(|r| r.id).collect();
        let mut tags_by_page: HashMap<DbId, Vec<Tag>> = HashMap::new();
        for row in TagRepo::list_for_pages(pool, &ids).await? {
            tags_by_page.entry(row.page_id).or_default().push(Tag {
                id: row.id,
                name: row.name,
            });
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let tags = tags_by_page.remove(&row.id).unwrap_or_default();
                into_detail(row, tags)
            })
            .collect())
    }

    /// A single page with author and tags.
    pub async fn find_detailed(pool: &PgPool, id: DbId) -> Result<Option<PageDetail>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} FROM pages p
             JOIN users u ON u.id = p.author_id
             WHERE p.id = $1"
        );
        let Some(row) = sqlx::query_as::<_, PageAuthorRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };
        let tags = TagRepo::list_for_page(pool, id).await?;
        Ok(Some(into_detail(row, tags)))
    }

    /// The `limit` most recently updated pages.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<RecentPage>, sqlx::Error> {
        sqlx::query_as::<_, RecentPage>(
            "SELECT id, title, updated_at FROM pages
             ORDER BY updated_at DESC, id DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    pub async fn count_by_author(pool: &PgPool, author_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM pages WHERE author_id = $1")
            .bind(author_id)
            .fetch_one(pool)
            .await
    }
}

fn into_detail(row: PageAuthorRow, tags: Vec<Tag>) -> PageDetail {
    PageDetail {
        author: AuthorSummary {
            id: row.author_id,
            name: row.author_name,
            email: row.author_email,
        },
        page: Page {
            id: row.id,
            title: row.title,
            content: row.content,
            author_id: row.author_id,
            parent_id: row.parent_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        },
        tags,
    }
}
