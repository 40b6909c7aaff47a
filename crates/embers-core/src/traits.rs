//! Core traits decoupling the pipeline from concrete backends.

use std::future::Future;

use crate::category::Category;
use crate::error::AppError;
use crate::models::{Item, UserAggregate};

/// Client for the upstream HackerNews API.
///
/// Implementations fetch the ranked id listing for a category and the
/// detail payload for a single id. Payload-to-domain conversion is a
/// static method so the pipeline can map fetched data without holding
/// a client reference.
pub trait UpstreamClient: Send + Sync + Clone {
    /// Raw detail payload returned by this client.
    type Detail: Send;

    /// Fetches the full ranked id listing for `category`.
    fn list_ids(
        &self,
        category: Category,
    ) -> impl Future<Output = Result<Vec<i64>, AppError>> + Send;

    /// Fetches the detail payload for one id. `Ok(None)` means the id
    /// does not resolve to an item upstream.
    fn get_item(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<Self::Detail>, AppError>> + Send;

    /// Converts a raw payload into a domain item. `None` means the
    /// payload is missing a required field and must be skipped.
    fn into_item(detail: Self::Detail) -> Option<Item>;
}

/// Storage backend for items.
pub trait ItemStore: Send + Sync + Clone {
    /// Upserts the batch atomically, keyed by item id. Either every item
    /// is written or none is. Returns the number of rows written.
    fn upsert_batch(
        &self,
        items: &[Item],
    ) -> impl Future<Output = Result<usize, AppError>> + Send;

    /// Fetches a single item by id.
    fn get(&self, id: i64) -> impl Future<Output = Result<Option<Item>, AppError>> + Send;

    /// Lists a window of items ordered by ascending id.
    fn list_page(
        &self,
        offset: i64,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<Item>, AppError>> + Send;

    /// Total number of stored items.
    fn count(&self) -> impl Future<Output = Result<i64, AppError>> + Send;

    /// Lists a window of per-author rollups, ordered by each author's
    /// earliest item id.
    fn user_aggregates(
        &self,
        offset: i64,
        limit: i64,
    ) -> impl Future<Output = Result<Vec<UserAggregate>, AppError>> + Send;

    /// Number of distinct authors across stored items.
    fn user_count(&self) -> impl Future<Output = Result<i64, AppError>> + Send;

    /// Verifies the backend is reachable.
    fn health_check(&self) -> impl Future<Output = Result<(), AppError>> + Send;
}
