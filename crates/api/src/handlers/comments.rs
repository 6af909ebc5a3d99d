//! Handlers for the `/comments` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use teamwiki_core::audit::{ACTION_COMMENT_CREATE, ENTITY_COMMENT};
use teamwiki_core::error::CoreError;
use teamwiki_core::notifications::NEW_COMMENT_MESSAGE;
use teamwiki_core::types::DbId;
use teamwiki_db::models::comment::CreateCommentRequest;
use teamwiki_db::repositories::{CommentRepo, PageRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{Path, ValidatedJson};
use crate::middleware::rbac::RequireAuth;
use crate::services::{audit, broadcast};
use crate::state::AppState;

/// GET /comments/{page_id}
///
/// Comments with author id and name, oldest first.
pub async fn list_comments(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let comments = CommentRepo::list_by_page(&state.pool, page_id).await?;
    Ok(Json(comments))
}

/// POST /comments/{page_id}
///
/// Any authenticated role may comment. A reply's parent must be a comment
/// on the same page.
pub async fn create_comment(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CreateCommentRequest>,
) -> AppResult<impl IntoResponse> {
    if PageRepo::find_by_id(&state.pool, page_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Page",
            id: page_id,
        }));
    }

    if let Some(parent_id) = input.parent_id {
        let parent = CommentRepo::find_by_id(&state.pool, parent_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Comment",
                id: parent_id,
            }))?;
        if parent.page_id != page_id {
            return Err(AppError::BadRequest(
                "Parent comment belongs to a different page".into(),
            ));
        }
    }

    let comment = CommentRepo::create(
        &state.pool,
        page_id,
        user.user_id,
        input.parent_id,
        &input.content,
    )
    .await?;

    tracing::info!(
        user_id = user.user_id,
        page_id,
        comment_id = comment.id,
        "Comment created"
    );

    audit::record(
        &state.pool,
        user.user_id,
        ACTION_COMMENT_CREATE,
        ENTITY_COMMENT,
        comment.id,
        None,
    )
    .await;
    broadcast::notify_editors(&state.pool, NEW_COMMENT_MESSAGE).await;

    Ok((StatusCode::CREATED, Json(comment)))
}
