//! Story listing categories exposed by the HackerNews API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A ranked story listing on HackerNews.
///
/// Each category maps to one upstream listing endpoint
/// (`newstories`, `topstories`, `beststories`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    New,
    Top,
    Best,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::New => write!(f, "new"),
            Category::Top => write!(f, "top"),
            Category::Best => write!(f, "best"),
        }
    }
}

impl FromStr for Category {
    type Err = AppError;

    /// Parses the exact lowercase names used on the wire.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Category::New),
            "top" => Ok(Category::Top),
            "best" => Ok(Category::Best),
            _ => Err(AppError::InvalidRequest(format!(
                "unknown category: '{s}'. Valid options: new, top, best"
            ))),
        }
    }
}

// ===== Tests =====
