//! HackerNews Firebase API client.

use chrono::DateTime;
use embers_core::{AppError, Category, HttpConfig, Item, UpstreamClient};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

/// Public base URL of the HackerNews Firebase API.
pub const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0/";

/// Raw item payload as served by `item/{id}.json`.
///
/// Only `id` is guaranteed; everything else is optional on the wire.
/// Deleted items in particular carry little more than their id.
#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
    pub id: i64,
    pub by: Option<String>,
    pub time: Option<i64>,
    pub score: Option<i64>,
    pub title: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Client for the HackerNews Firebase API.
#[derive(Debug, Clone)]
pub struct HnClient {
    client: Client,
    base_url: Url,
    timeout_secs: u64,
}

impl HnClient {
    /// Creates a client with default HTTP configuration.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Self::with_config(base_url, &HttpConfig::default())
    }

    /// Creates a client with custom HTTP configuration.
    pub fn with_config(base_url: &str, config: &HttpConfig) -> Result<Self, AppError> {
        let mut parsed = Url::parse(base_url)
            .map_err(|e| AppError::InvalidBaseUrl(format!("'{base_url}': {e}")))?;

        // Url::join treats a path without a trailing slash as a file and
        // would drop its last segment.
        if !parsed.path().ends_with('/') {
            parsed.set_path(&format!("{}/", parsed.path()));
        }

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(|e| AppError::ClientError(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: parsed,
            timeout_secs: config.timeout.as_secs(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Fetches the ranked id listing for `category`.
    pub async fn list_story_ids(&self, category: Category) -> Result<Vec<i64>, AppError> {
        let url = self.listing_url(category)?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ClientError(format!(
                "HTTP {} from {url}",
                status.as_u16()
            )));
        }

        response
            .json::<Vec<i64>>()
            .await
            .map_err(|e| AppError::ClientError(format!("Failed to parse listing response: {e}")))
    }

    /// Fetches the detail payload for one item id.
    ///
    /// Returns `Ok(None)` when the id does not resolve: the API answers
    /// such requests with 404 or with a literal `null` body.
    pub async fn show_item(&self, id: i64) -> Result<Option<RawItem>, AppError> {
        let url = self.item_url(id)?;

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(AppError::ClientError(format!(
                "HTTP {} from {url}",
                status.as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::ClientError(format!("Failed to read item {id} response: {e}")))?;

        let raw: Option<RawItem> = serde_json::from_str(&body)?;
        Ok(raw)
    }

    /// Converts a raw payload into a domain item.
    ///
    /// `by`, `time`, and `type` are required; a payload missing any of
    /// them yields `None`. Score defaults to zero, title and URL to the
    /// empty string.
    pub fn into_item(raw: RawItem) -> Option<Item> {
        let author = raw.by?;
        let time = DateTime::from_timestamp(raw.time?, 0)?;
        let kind = raw.kind?;

        Some(Item {
            id: raw.id,
            author,
            time,
            score: raw.score.unwrap_or(0),
            title: raw.title.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
            kind,
        })
    }

    fn listing_url(&self, category: Category) -> Result<Url, AppError> {
        self.base_url
            .join(&format!("{category}stories.json"))
            .map_err(|e| AppError::Generic(format!("Failed to build listing URL: {e}")))
    }

    fn item_url(&self, id: i64) -> Result<Url, AppError> {
        self.base_url
            .join(&format!("item/{id}.json"))
            .map_err(|e| AppError::Generic(format!("Failed to build item URL: {e}")))
    }

    fn map_send_error(&self, e: reqwest::Error) -> AppError {
        if e.is_timeout() {
            AppError::Timeout(self.timeout_secs)
        } else if e.is_connect() {
            AppError::NetworkError(format!("Connection failed: {e}"))
        } else {
            AppError::ClientError(e.to_string())
        }
    }
}

// ===== Trait Implementations: UpstreamClient =====

impl UpstreamClient for HnClient {
    type Detail = RawItem;

    async fn list_ids(&self, category: Category) -> Result<Vec<i64>, AppError> {
        self.list_story_ids(category).await
    }

    async fn get_item(&self, id: i64) -> Result<Option<RawItem>, AppError> {
        self.show_item(id).await
    }

    fn into_item(raw: RawItem) -> Option<Item> {
        HnClient::into_item(raw)
    }
}

// ===== Tests =====
