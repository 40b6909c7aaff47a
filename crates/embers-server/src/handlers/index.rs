//! Root redirect.

use axum::response::Redirect;

/// `GET /` - redirects to the item listing.
pub async fn index() -> Redirect {
    Redirect::temporary("/items")
}

// ===== Tests =====
