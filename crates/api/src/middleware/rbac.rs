//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role is not
//! in the permitted set, so authorization is enforced by a handler's
//! signature.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use teamwiki_core::error::CoreError;
use teamwiki_core::roles::{Role, EDITOR_ROLES};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Reject `user` with 403 unless its role is one of `allowed`.
pub fn require_role(user: AuthUser, allowed: &[Role]) -> Result<AuthUser, AppError> {
    if user.role.is_any_of(allowed) {
        Ok(user)
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "Insufficient role for this action".into(),
        )))
    }
}

/// Requires `ADMIN` or `EDITOR`. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn edit(RequireEditor(user): RequireEditor) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireEditor(pub AuthUser);

impl FromRequestParts<AppState> for RequireEditor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        require_role(user, EDITOR_ROLES).map(RequireEditor)
    }
}

/// Requires any authenticated user (any valid role).
///
/// Functionally equivalent to [`AuthUser`] but named explicitly for routes
/// where "this route requires authentication" should be self-documenting.
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}
