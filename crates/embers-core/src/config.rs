//! Configuration types for ingestion and upstream HTTP access.

use std::time::Duration;

/// Configuration for the item ingestion pipeline.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    /// Maximum number of detail fetches in flight at once.
    pub concurrency: usize,
    /// Upper bound on the duration of one whole load call, listing
    /// fetch through persistence.
    pub deadline: Duration,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            concurrency: 100,
            deadline: Duration::from_secs(300),
        }
    }
}

impl LoadConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fetch concurrency. Values below 1 are clamped to 1.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }
}

/// Configuration for the upstream HTTP client.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Per-request timeout.
    pub timeout: Duration,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: "Embers/0.1 (hackernews-loader)".to_string(),
        }
    }
}

impl HttpConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

// ===== Tests =====
