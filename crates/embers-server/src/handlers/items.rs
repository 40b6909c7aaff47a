//! Handlers for the item read endpoints.

use axum::extract::{Path, Query, State};
use axum::Json;

use crate::dto::{ItemListResponse, ItemResponse, PageQuery};
use crate::error::ApiError;
use crate::pagination::resolve_page;
use crate::state::AppState;

/// `GET /item/{id}` - fetches one stored item.
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state
        .item_repo
        .get(id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(format!("item {id} not found")))?;

    Ok(Json(ItemResponse::from(item)))
}

/// `GET /items` - pages through stored items in ascending id order.
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<ItemListResponse>, ApiError> {
    let total = state.item_repo.count().await.map_err(ApiError::from)?;
    let window = resolve_page(query.page(), query.limit(), total)?;

    let items = state
        .item_repo
        .list_page(window.offset, window.limit)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ItemListResponse {
        next_page: window.next_page,
        items: items.into_iter().map(ItemResponse::from).collect(),
    }))
}
