//! Handlers for the `/pages` resource.
//!
//! Every create, update and restore appends exactly one version row, so a
//! page's current title and content always match its highest version.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use teamwiki_core::audit::{
    page_created_details, page_deleted_details, page_restored_details, page_updated_details,
    ACTION_PAGE_CREATE, ACTION_PAGE_DELETE, ACTION_PAGE_RESTORE, ACTION_PAGE_UPDATE, ENTITY_PAGE,
};
use teamwiki_core::diff::{diff_lines, strip_markup};
use teamwiki_core::error::CoreError;
use teamwiki_core::notifications::{page_created_message, page_updated_message};
use teamwiki_core::pages::{next_version_number, normalize_tag_names, FIRST_VERSION};
use teamwiki_core::types::DbId;
use teamwiki_db::models::page::{
    CreatePage, CreatePageRequest, Page, PageFilter, UpdatePageRequest,
};
use teamwiki_db::models::page_version::{DiffParams, PageVersion, VersionDiff};
use teamwiki_db::repositories::{PageRepo, PageVersionRepo, TagRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{Path, Query, ValidatedJson};
use crate::middleware::rbac::{RequireAuth, RequireEditor};
use crate::services::{audit, broadcast};
use crate::state::AppState;

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Fetch a page by id or return 404.
async fn ensure_page(pool: &sqlx::PgPool, id: DbId) -> AppResult<Page> {
    PageRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Page",
            id,
        }))
}

/// Fetch one version of a page or return 404.
async fn ensure_version(pool: &sqlx::PgPool, page_id: DbId, version: i32) -> AppResult<PageVersion> {
    PageVersionRepo::find_by_page_and_version(pool, page_id, version)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PageVersion",
            id: DbId::from(version),
        }))
}

/// Overwrite the page with `title`/`content` and append the next version.
async fn write_new_version(
    pool: &sqlx::PgPool,
    page_id: DbId,
    title: &str,
    content: &str,
) -> AppResult<(Page, i32)> {
    let existing = PageVersionRepo::count_by_page(pool, page_id).await?;
    let version = next_version_number(existing)?;

    let page = PageRepo::update_content(pool, page_id, title, content)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Page",
            id: page_id,
        }))?;
    PageVersionRepo::create(pool, page_id, version, &page.title, &page.content).await?;

    Ok((page, version))
}

/* --------------------------------------------------------------------------
Page CRUD
-------------------------------------------------------------------------- */

/// GET /pages
///
/// All pages with author and tags, most recently updated first.
pub async fn list_pages(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let pages = PageRepo::list_detailed(&state.pool, &PageFilter::default()).await?;
    Ok(Json(pages))
}

/// GET /pages/{id}
pub async fn get_page(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let page = PageRepo::find_detailed(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Page", id }))?;
    Ok(Json(page))
}

/// POST /pages
///
/// Create a page with version 1 and link its tags, creating unknown tag
/// names on the fly.
pub async fn create_page(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreatePageRequest>,
) -> AppResult<impl IntoResponse> {
    if let Some(parent_id) = input.parent_id {
        ensure_page(&state.pool, parent_id).await?;
    }

    let page = PageRepo::create(
        &state.pool,
        &CreatePage {
            title: &input.title,
            content: &input.content,
            author_id: user.user_id,
            parent_id: input.parent_id,
        },
    )
    .await?;
    PageVersionRepo::create(&state.pool, page.id, FIRST_VERSION, &page.title, &page.content)
        .await?;

    for name in normalize_tag_names(&input.tag_names) {
        let tag = TagRepo::find_or_create(&state.pool, &name).await?;
        TagRepo::link(&state.pool, page.id, tag.id).await?;
    }

    tracing::info!(user_id = user.user_id, page_id = page.id, "Page created");

    audit::record(
        &state.pool,
        user.user_id,
        ACTION_PAGE_CREATE,
        ENTITY_PAGE,
        page.id,
        Some(page_created_details(&page.title)),
    )
    .await;
    broadcast::notify_editors(&state.pool, &page_created_message(&page.title)).await;

    Ok((StatusCode::CREATED, Json(page)))
}

/// PUT /pages/{id}
///
/// Overwrite title and content and append a new version.
pub async fn update_page(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdatePageRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_page(&state.pool, id).await?;

    let (page, version) = write_new_version(&state.pool, id, &input.title, &input.content).await?;

    tracing::info!(user_id = user.user_id, page_id = id, version, "Page updated");

    audit::record(
        &state.pool,
        user.user_id,
        ACTION_PAGE_UPDATE,
        ENTITY_PAGE,
        id,
        Some(page_updated_details(&page.title)),
    )
    .await;
    broadcast::notify_editors(&state.pool, &page_updated_message(&page.title)).await;

    Ok(Json(page))
}

/// DELETE /pages/{id}
///
/// Delete a page together with its versions, tag links and comments.
pub async fn delete_page(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_page(&state.pool, id).await?;

    if !PageRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Page", id }));
    }

    tracing::info!(user_id = user.user_id, page_id = id, "Page deleted");

    audit::record(
        &state.pool,
        user.user_id,
        ACTION_PAGE_DELETE,
        ENTITY_PAGE,
        id,
        Some(page_deleted_details(&existing.title)),
    )
    .await;

    Ok(StatusCode::NO_CONTENT)
}

/* --------------------------------------------------------------------------
Versions
-------------------------------------------------------------------------- */

/// GET /pages/{id}/versions
///
/// Newest version first. An unknown page yields an empty list.
pub async fn list_versions(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let versions = PageVersionRepo::list_by_page(&state.pool, id).await?;
    Ok(Json(versions))
}

/// GET /pages/{id}/versions/{version}
pub async fn get_version(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path((id, version)): Path<(DbId, i32)>,
) -> AppResult<impl IntoResponse> {
    let version = ensure_version(&state.pool, id, version).await?;
    Ok(Json(version))
}

/// POST /pages/{id}/restore/{version}
///
/// Re-apply a historical version as a new current version. Versions in
/// between are kept.
pub async fn restore_version(
    RequireEditor(user): RequireEditor,
    State(state): State<AppState>,
    Path((id, version)): Path<(DbId, i32)>,
) -> AppResult<impl IntoResponse> {
    let target = ensure_version(&state.pool, id, version).await?;

    let (page, new_version) =
        write_new_version(&state.pool, id, &target.title, &target.content).await?;

    tracing::info!(
        user_id = user.user_id,
        page_id = id,
        restored_from = version,
        version = new_version,
        "Page restored"
    );

    audit::record(
        &state.pool,
        user.user_id,
        ACTION_PAGE_RESTORE,
        ENTITY_PAGE,
        id,
        Some(page_restored_details(version)),
    )
    .await;

    Ok(Json(page))
}

/// GET /pages/{id}/diff?from=A&to=B
///
/// Line diff of two versions after stripping markup, computed on the
/// blocking pool.
pub async fn diff_versions(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<DiffParams>,
) -> AppResult<impl IntoResponse> {
    let from = ensure_version(&state.pool, id, params.from).await?;
    let to = ensure_version(&state.pool, id, params.to).await?;

    let diff = tokio::task::spawn_blocking(move || {
        let old_lines = strip_markup(&from.content);
        let new_lines = strip_markup(&to.content);
        let lines = diff_lines(&old_lines, &new_lines);
        VersionDiff {
            page_id: id,
            from: from.version,
            to: to.version,
            from_text: old_lines.join("\n"),
            to_text: new_lines.join("\n"),
            lines,
        }
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Diff task failed: {e}")))?;

    Ok(Json(diff))
}
