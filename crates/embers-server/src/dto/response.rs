//! Response types.

use chrono::{DateTime, Utc};
use embers_core::{Item, UserAggregate};
use serde::Serialize;

/// Body of a successful `POST /load`.
#[derive(Debug, Serialize)]
pub struct LoadResponse {
    /// Number of items written by this call.
    pub saved: usize,
}

/// One item on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub author: String,
    pub time: DateTime<Utc>,
    pub score: i64,
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            author: item.author,
            time: item.time,
            score: item.score,
            title: item.title,
            url: item.url,
            kind: item.kind,
        }
    }
}

/// Body of `GET /items`.
#[derive(Debug, Serialize)]
pub struct ItemListResponse {
    /// Number of the following page, or null on the last page.
    pub next_page: Option<i64>,
    pub items: Vec<ItemResponse>,
}

/// One per-author rollup on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub name: String,
    pub item_count: i64,
    pub score: i64,
}

impl From<UserAggregate> for UserResponse {
    fn from(user: UserAggregate) -> Self {
        Self {
            name: user.name,
            item_count: user.item_count,
            score: user.score,
        }
    }
}

/// Body of `GET /users`.
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    /// Number of the following page, or null on the last page.
    pub next_page: Option<i64>,
    pub users: Vec<UserResponse>,
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: ServiceStatus,
}

/// Health of a single dependency.
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

// ===== Tests =====
