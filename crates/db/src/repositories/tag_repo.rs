//! Repository for the `tags` and `page_tags` tables.

use sqlx::PgPool;
use teamwiki_core::types::DbId;

use crate::models::tag::{PageTagRow, Tag};

pub struct TagRepo;

impl TagRepo {
    /// Return the tag named `name`, creating it on first use.
    ///
    /// The no-op `DO UPDATE` makes `RETURNING` yield the existing row on conflict.
    pub async fn find_or_create(pool: &PgPool, name: &str) -> Result<Tag, sqlx::Error> {
        sqlx::query_as::<_, Tag>(
            "INSERT INTO tags (name) VALUES ($1)
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
             RETURNING id, name",
        )
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// Link a tag to a page. Linking an already linked pair is a no-op.
    pub async fn link(pool: &PgPool, page_id: DbId, tag_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO page_tags (page_id, tag_id) VALUES ($1, $2)
             ON CONFLICT (page_id, tag_id) DO NOTHING",
        )
        .bind(page_id)
        .bind(tag_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Tags of a single page, alphabetically.
    pub async fn list_for_page(pool: &PgPool, page_id: DbId) -> Result<Vec<Tag>, sqlx::Error> {
        sqlx::query_as::<_, Tag>(
            "SELECT t.id, t.name FROM tags t
             JOIN page_tags pt ON pt.tag_id = t.id
             WHERE pt.page_id = $1
             ORDER BY t.name",
        )
        .bind(page_id)
        .fetch_all(pool)
        .await
    }

    /// Tags of many pages in one round-trip.
    pub async fn list_for_pages(
        pool: &PgPool,
        page_ids: &[DbId],
    ) -> Result<Vec<PageTagRow>, sqlx::Error> {
        if page_ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, PageTagRow>(
            "SELECT pt.page_id, t.id, t.name FROM page_tags pt
             JOIN tags t ON t.id = pt.tag_id
             WHERE pt.page_id = ANY($1)
             ORDER BY pt.page_id, t.name",
        )
        .bind(page_ids)
        .fetch_all(pool)
        .await
    }

    /// Number of links held by a page.
    pub async fn count_links_for_page(pool: &PgPool, page_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM page_tags WHERE page_id = $1")
            .bind(page_id)
            .fetch_one(pool)
            .await
    }
}
