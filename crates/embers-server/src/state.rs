//! Shared application state.

use embers_client::HnClient;
use embers_core::{LoadConfig, LoadService};
use embers_db::ItemRepository;
use sqlx::PgPool;

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Ingestion pipeline wired to the upstream client and the database.
    pub load_service: LoadService<ItemRepository, HnClient>,
    /// Repository access for the read endpoints.
    pub item_repo: ItemRepository,
}

impl AppState {
    pub fn new(pool: PgPool, client: HnClient, load_config: LoadConfig) -> Self {
        let item_repo = ItemRepository::new(pool);
        let load_service = LoadService::with_config(item_repo.clone(), client, load_config);
        Self {
            load_service,
            item_repo,
        }
    }
}
