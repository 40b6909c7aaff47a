//! Embers DB - PostgreSQL persistence for items.
//!
//! [`ItemRepository`] implements the `ItemStore` trait from `embers-core`
//! on top of a sqlx connection pool. The schema is applied on startup via
//! [`ItemRepository::init_schema`].

pub mod repository;

pub use repository::ItemRepository;
