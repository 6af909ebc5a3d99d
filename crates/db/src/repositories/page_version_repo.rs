//! Repository for the `page_versions` table.
//!
//! Versions are append-only: there is no update or delete here. Rows go away
//! only through the cascade when their page is deleted.

use sqlx::PgPool;
use teamwiki_core::types::DbId;

use crate::models::page_version::PageVersion;

const COLUMNS: &str = "id, page_id, version, title, content, created_at";

pub struct PageVersionRepo;

impl PageVersionRepo {
    /// Append a version snapshot.
    pub async fn create(
        pool: &PgPool,
        page_id: DbId,
        version: i32,
        title: &str,
        content: &str,
    ) -> Result<PageVersion, sqlx::Error> {
        let query = format!(
            "INSERT INTO page_versions (page_id, version, title, content)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PageVersion>(&query)
            .bind(page_id)
            .bind(version)
            .bind(title)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// All versions of a page, newest version number first.
    pub async fn list_by_page(pool: &PgPool, page_id: DbId) -> Result<Vec<PageVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM page_versions
             WHERE page_id = $1
             ORDER BY version DESC"
        );
        sqlx::query_as::<_, PageVersion>(&query)
            .bind(page_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_page_and_version(
        pool: &PgPool,
        page_id: DbId,
        version: i32,
    ) -> Result<Option<PageVersion>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM page_versions
             WHERE page_id = $1 AND version = $2"
        );
        sqlx::query_as::<_, PageVersion>(&query)
            .bind(page_id)
            .bind(version)
            .fetch_optional(pool)
            .await
    }

    /// Number of version rows stored for a page.
    pub async fn count_by_page(pool: &PgPool, page_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM page_versions WHERE page_id = $1")
            .bind(page_id)
            .fetch_one(pool)
            .await
    }
}
