//! Page window arithmetic for the listing endpoints.

use crate::error::ApiError;

const INVALID_PAGE: &str = "invalid page number";

/// A resolved page window over a known row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: i64,
    /// Number of the following page, if one exists.
    pub next_page: Option<i64>,
}

/// Resolves raw `page` and `limit` query values against a row count.
///
/// Absent or zero values fall back to their defaults: page one, and a
/// page size covering every row. A page outside the valid range, or a
/// negative value for either parameter, is rejected. An empty table has
/// exactly one (empty) page.
pub fn resolve_page(
    page: Option<i64>,
    limit: Option<i64>,
    total: i64,
) -> Result<PageWindow, ApiError> {
    let per_page = match limit {
        None | Some(0) => total.max(1),
        Some(l) if l > 0 => l,
        Some(_) => return Err(ApiError::BadRequest(INVALID_PAGE.to_string())),
    };

    let page = match page {
        None | Some(0) => 1,
        Some(p) => p,
    };
    if page < 1 {
        return Err(ApiError::BadRequest(INVALID_PAGE.to_string()));
    }

    let num_pages = if total == 0 {
        1
    } else {
        total / per_page + i64::from(total % per_page != 0)
    };
    if page > num_pages {
        return Err(ApiError::BadRequest(INVALID_PAGE.to_string()));
    }

    Ok(PageWindow {
        offset: (page - 1) * per_page,
        limit: per_page,
        next_page: (page < num_pages).then(|| page + 1),
    })
}

// ===== Tests =====
