//! Error types for Embers.
//!
//! This module defines the central error enum used across all Embers crates.
//! Library code propagates `AppError`; the HTTP layer maps it onto wire
//! responses.

use thiserror::Error;

/// Central error type for all Embers operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// Upstream API returned an unexpected response.
    #[error("API client error: {0}")]
    ClientError(String),

    /// JSON serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// The configured upstream base URL could not be parsed.
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// Network-level failure while talking to the upstream API.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timed out.
    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    /// The upstream listing could not be retrieved; nothing was persisted.
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Request validation failed.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Generic error with a custom message.
    #[error("{0}")]
    Generic(String),
}

impl AppError {
    /// Returns a user-facing message that does not leak internal details.
    pub fn user_message(&self) -> String {
        match self {
            Self::DatabaseError(_) => {
                "A database error occurred. Please try again later.".to_string()
            }
            Self::ClientError(_) => "Failed to communicate with the HackerNews API.".to_string(),
            Self::SerializationError(_) => {
                "Received a malformed response from the HackerNews API.".to_string()
            }
            Self::InvalidBaseUrl(url) => {
                format!("The configured API base URL is not valid: {url}")
            }
            Self::NetworkError(_) => {
                "A network error occurred. Check your connection and try again.".to_string()
            }
            Self::Timeout(secs) => format!("The request timed out after {secs} seconds."),
            Self::UpstreamUnavailable(_) => {
                "The HackerNews API is currently unavailable. Please try again later.".to_string()
            }
            Self::InvalidRequest(msg) | Self::Generic(msg) => msg.clone(),
        }
    }

    /// Whether retrying the same operation could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError(_) | Self::Timeout(_) | Self::UpstreamUnavailable(_)
        )
    }
}

// ===== Tests =====
