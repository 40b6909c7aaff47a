//! Embers Client - HTTP access to the HackerNews Firebase API.
//!
//! [`HnClient`] implements the `UpstreamClient` trait from `embers-core`:
//! ranked id listings via `{category}stories.json` and item details via
//! `item/{id}.json`.

pub mod hn;

pub use hn::{DEFAULT_BASE_URL, HnClient, RawItem};
