//! Data transfer objects for the REST API.

mod request;
mod response;

pub use request::*;
pub use response::*;
