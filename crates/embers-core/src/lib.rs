//! Embers Core - domain types and the item ingestion pipeline.
//!
//! This crate defines the shared vocabulary of the Embers service:
//! the [`Item`] model, the [`Category`] listings, the [`AppError`] type,
//! and the [`UpstreamClient`]/[`ItemStore`] traits that decouple the
//! ingestion pipeline from concrete HTTP and database backends.
//!
//! The pipeline itself lives in [`load`]: one call fetches a ranked id
//! listing, fans out over item details with bounded concurrency, and
//! persists the well-formed results in a single atomic batch.

pub mod category;
pub mod config;
pub mod error;
pub mod load;
pub mod models;
pub mod stats;
pub mod traits;

pub use category::Category;
pub use config::{HttpConfig, LoadConfig};
pub use error::AppError;
pub use load::{LoadService, LoadSummary};
pub use models::{Item, UserAggregate};
pub use stats::{AtomicLoadStats, LoadOutcome, LoadStats};
pub use traits::{ItemStore, UpstreamClient};
