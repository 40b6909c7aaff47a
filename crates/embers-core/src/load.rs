//! Item ingestion pipeline.
//!
//! [`LoadService`] drives one ingestion run: fetch the ranked id listing
//! for a category, fan out over the ids to fetch item details with bounded
//! concurrency, then persist every well-formed item in a single atomic
//! batch. Individual detail failures are absorbed; a listing failure or a
//! persistence failure aborts the run with nothing written.

use std::sync::Arc;

use futures::stream::{self, StreamExt};

use crate::category::Category;
use crate::config::LoadConfig;
use crate::error::AppError;
use crate::models::Item;
use crate::stats::{AtomicLoadStats, LoadOutcome, LoadStats};
use crate::traits::{ItemStore, UpstreamClient};

/// Result of one ingestion run.
#[derive(Debug, Clone, Copy)]
pub struct LoadSummary {
    /// Number of items written in this run.
    pub saved: usize,
    /// Per-id fetch accounting for this run.
    pub stats: LoadStats,
}

/// Service that ingests items from the upstream API into a store.
pub struct LoadService<S, C>
where
    S: ItemStore,
    C: UpstreamClient,
{
    store: S,
    client: C,
    config: LoadConfig,
}

impl<S, C> Clone for LoadService<S, C>
where
    S: ItemStore,
    C: UpstreamClient,
{
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            client: self.client.clone(),
            config: self.config.clone(),
        }
    }
}

impl<S, C> LoadService<S, C>
where
    S: ItemStore,
    C: UpstreamClient,
{
    /// Creates a service with default configuration.
    pub fn new(store: S, client: C) -> Self {
        Self::with_config(store, client, LoadConfig::default())
    }

    /// Creates a service with custom configuration.
    pub fn with_config(store: S, client: C, config: LoadConfig) -> Self {
        Self {
            store,
            client,
            config,
        }
    }

    /// Runs one ingestion pass for `category`.
    ///
    /// `limit` caps how many ids from the front of the listing are
    /// processed; `None` or `Some(0)` means the whole listing. The run
    /// is bounded by the configured deadline.
    pub async fn load(
        &self,
        category: Category,
        limit: Option<usize>,
    ) -> Result<LoadSummary, AppError> {
        let deadline = self.config.deadline;
        match tokio::time::timeout(deadline, self.execute(category, limit)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!(
                    category = %category,
                    deadline_secs = deadline.as_secs(),
                    "Load deadline exceeded"
                );
                Err(AppError::UpstreamUnavailable(format!(
                    "load exceeded the {}s deadline",
                    deadline.as_secs()
                )))
            }
        }
    }

    async fn execute(
        &self,
        category: Category,
        limit: Option<usize>,
    ) -> Result<LoadSummary, AppError> {
        // A listing failure fails the whole call; nothing has been written yet.
        let mut ids = match self.client.list_ids(category).await {
            Ok(ids) => ids,
            Err(e) => {
                tracing::error!(category = %category, error = %e, "Failed to fetch id listing");
                return Err(AppError::UpstreamUnavailable(e.to_string()));
            }
        };

        if let Some(limit) = limit.filter(|&l| l > 0) {
            ids.truncate(limit);
        }

        tracing::info!(category = %category, count = ids.len(), "Fetching item details");

        let stats = Arc::new(AtomicLoadStats::new());

        let items: Vec<Item> = stream::iter(ids)
            .map(|id| {
                let client = self.client.clone();
                let stats = Arc::clone(&stats);
                async move {
                    match client.get_item(id).await {
                        Ok(Some(detail)) => match C::into_item(detail) {
                            Some(item) => {
                                stats.record(LoadOutcome::Fetched);
                                Some(item)
                            }
                            None => {
                                tracing::warn!(item_id = id, "Malformed item payload, skipping");
                                stats.record(LoadOutcome::Skipped);
                                None
                            }
                        },
                        Ok(None) => {
                            tracing::warn!(item_id = id, "Item not found upstream, skipping");
                            stats.record(LoadOutcome::Skipped);
                            None
                        }
                        Err(e) => {
                            tracing::warn!(item_id = id, error = %e, "Failed to fetch item, skipping");
                            stats.record(LoadOutcome::Skipped);
                            None
                        }
                    }
                }
            })
            .buffer_unordered(self.config.concurrency)
            .filter_map(|item| async move { item })
            .collect()
            .await;

        // One transaction for the whole batch; a failure here writes nothing.
        let saved = self.store.upsert_batch(&items).await?;

        let stats = stats.to_stats();
        tracing::info!(
            category = %category,
            fetched = stats.fetched,
            skipped = stats.skipped,
            saved,
            "Load complete"
        );

        Ok(LoadSummary { saved, stats })
    }
}
