//! Embers Server - REST API over the ingestion pipeline and item store.
//!
//! Endpoints:
//! - `POST /load` - run one ingestion pass
//! - `GET /item/{id}` - fetch one stored item
//! - `GET /items` - page through stored items
//! - `GET /users` - page through per-author rollups
//! - `GET /health` - liveness and database connectivity
//! - `GET /` - redirect to `/items`

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod pagination;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ErrorResponse};
pub use router::create_router;
pub use state::AppState;
