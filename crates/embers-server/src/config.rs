//! Server configuration from CLI flags and environment variables.

use clap::Parser;
use embers_client::DEFAULT_BASE_URL;

/// Configuration for the Embers API server.
#[derive(Parser, Debug, Clone)]
#[command(name = "embers-server")]
#[command(author, version, about = "REST API for loading and browsing HackerNews items")]
pub struct ServerConfig {
    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,

    /// Base URL of the upstream HackerNews API
    #[arg(long, env = "HN_API_URL", default_value = DEFAULT_BASE_URL)]
    pub hn_api_url: String,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Maximum concurrent detail fetches per load call
    #[arg(long, env = "LOAD_CONCURRENCY", default_value = "100")]
    pub load_concurrency: usize,

    /// Overall deadline for one load call, in seconds
    #[arg(long, env = "LOAD_DEADLINE_SECS", default_value = "300")]
    pub load_deadline_secs: u64,

    /// Timeout for individual upstream HTTP requests, in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value = "30")]
    pub http_timeout_secs: u64,

    /// Comma-separated list of allowed CORS origins, or "*" for any
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,
}

// ===== Tests =====
