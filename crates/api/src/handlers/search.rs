//! Handler for full-text page search.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use teamwiki_core::search::normalize_filter;
use teamwiki_db::models::page::{PageDetail, PageFilter};
use teamwiki_db::repositories::PageRepo;

use crate::error::AppResult;
use crate::extract::Query;
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub tag: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// The trimmed query, or `""` when none was given.
    pub query: String,
    pub count: usize,
    pub pages: Vec<PageDetail>,
}

/// GET /search?q=&tag=
///
/// `q` matches title or content case-insensitively; `tag` requires an
/// exact tag name. Blank values are ignored.
pub async fn search_pages(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResponse>> {
    let filter = PageFilter {
        text: normalize_filter(params.q.as_deref()),
        tag: normalize_filter(params.tag.as_deref()),
    };

    let pages = PageRepo::list_detailed(&state.pool, &filter).await?;

    Ok(Json(SearchResponse {
        query: filter.text.unwrap_or_default(),
        count: pages.len(),
        pages,
    }))
}
