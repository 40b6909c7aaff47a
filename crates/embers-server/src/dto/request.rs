//! Request types and their validation.

use embers_core::Category;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

/// Body of `POST /load` after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub category: Category,
    /// Cap on ids taken from the front of the listing. `None` means the
    /// whole listing; a zero on the wire is normalized to `None`.
    pub limit: Option<usize>,
}

impl LoadRequest {
    /// Parses and validates a raw request body.
    ///
    /// An empty body counts as an empty JSON object. The error messages
    /// here are part of the wire contract.
    pub fn parse(body: &[u8]) -> Result<Self, ApiError> {
        let value: Value = if body.is_empty() {
            Value::Object(serde_json::Map::new())
        } else {
            serde_json::from_slice(body)
                .map_err(|_| ApiError::BadRequest("invalid data.".to_string()))?
        };

        let category = value
            .get("type")
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<Category>().ok())
            .ok_or_else(|| ApiError::BadRequest("invalid or missing type.".to_string()))?;

        let limit = match value.get("limit") {
            None | Some(Value::Null) => None,
            Some(v) => match v.as_i64() {
                Some(n) if n >= 0 => Some(n as usize),
                _ => return Err(ApiError::BadRequest("invalid limit.".to_string())),
            },
        };

        Ok(Self {
            category,
            limit: limit.filter(|&l| l > 0),
        })
    }
}

/// Query parameters accepted by the listing endpoints.
///
/// Values are carried as raw strings; anything that does not parse as
/// an integer is treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> Option<i64> {
        self.page.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn limit(&self) -> Option<i64> {
        self.limit.as_deref().and_then(|s| s.parse().ok())
    }
}

// ===== Tests =====
