//! Handler for the per-author rollup endpoint.

use axum::extract::{Query, State};
use axum::Json;

use crate::dto::{PageQuery, UserListResponse, UserResponse};
use crate::error::ApiError;
use crate::pagination::resolve_page;
use crate::state::AppState;

/// `GET /users` - pages through per-author rollups, ordered by each
/// author's earliest item id.
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<UserListResponse>, ApiError> {
    let total = state.item_repo.user_count().await.map_err(ApiError::from)?;
    let window = resolve_page(query.page(), query.limit(), total)?;

    let users = state
        .item_repo
        .user_aggregates(window.offset, window.limit)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UserListResponse {
        next_page: window.next_page,
        users: users.into_iter().map(UserResponse::from).collect(),
    }))
}
