//! Domain models shared across the Embers crates.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A HackerNews item as stored locally.
///
/// The upstream item id is the primary key; re-ingesting an id overwrites
/// every other field with the latest upstream values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Item {
    /// Upstream item identifier.
    pub id: i64,
    /// Username of the item's author (`by` on the wire).
    pub author: String,
    /// Creation time, converted from the upstream Unix timestamp.
    pub time: DateTime<Utc>,
    /// Score at the time of the last ingestion. Items without a score
    /// (e.g. job postings) are stored as zero.
    pub score: i64,
    /// Title, empty when the upstream payload carries none.
    pub title: String,
    /// URL, empty when the upstream payload carries none.
    pub url: String,
    /// Item kind reported upstream: story, job, poll, and so on.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

/// Per-author rollup over all stored items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct UserAggregate {
    /// Author username.
    pub name: String,
    /// Number of stored items by this author.
    pub item_count: i64,
    /// Sum of the scores of this author's stored items.
    pub score: i64,
}

// ===== Tests =====
