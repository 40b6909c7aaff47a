//! HTTP request handlers.

pub mod health;
pub mod index;
pub mod items;
pub mod load;
pub mod users;
