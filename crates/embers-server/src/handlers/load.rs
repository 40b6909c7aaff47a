//! Handler for the ingestion endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::dto::{LoadRequest, LoadResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// `POST /load` - runs one ingestion pass.
///
/// The body selects the listing category and an optional cap on how
/// many ids to process. Validation happens before any upstream call.
pub async fn load_items(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LoadResponse>, ApiError> {
    let request = LoadRequest::parse(&body)?;

    let summary = state
        .load_service
        .load(request.category, request.limit)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(LoadResponse {
        saved: summary.saved,
    }))
}
