//! HTTP client for the Notion REST API.
//!
//! Only two endpoints are used: the database query (filtered to published
//! rows, newest first) and the block children listing of a page. Both are
//! paginated and both retry transient failures with exponential backoff.

use std::fmt;
use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use folio_core::{Block, SourceDocument};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{Error, Result};
use crate::wire::{ApiErrorBody, ListResponse, QueryRequest, SortSpec, WirePage, decode_block};

/// Default API root.
pub const DEFAULT_API_BASE: &str = "https://api.notion.com/v1";

/// API version sent in the `Notion-Version` header.
pub const DEFAULT_API_VERSION: &str = "2022-06-28";

/// Largest page size the API accepts.
pub const MAX_PAGE_SIZE: u32 = 100;

const NOTION_VERSION_HEADER: &str = "notion-version";

// ============================================================================
// Settings
// ============================================================================

/// Connection and query settings for a Notion database.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotionSettings {
    /// Integration token.
    pub token: String,
    /// Database holding the posts.
    pub database_id: String,
    /// API root URL.
    pub api_base: String,
    /// Value of the `Notion-Version` header.
    pub api_version: String,
    /// Select property used to filter published rows.
    pub status_property: String,
    /// Select option that marks a row as published.
    pub published_value: String,
    /// Date property to sort by, newest first.
    pub sort_property: String,
    /// Results requested per page (1 to 100).
    pub page_size: u32,
    /// Retries after the first attempt for transient failures.
    pub max_retries: usize,
    /// Initial backoff delay in milliseconds.
    pub retry_delay_ms: u64,
}

impl Default for NotionSettings {
    fn default() -> Self {
        Self {
            token: String::new(),
            database_id: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            status_property: "Status".to_string(),
            published_value: "Published".to_string(),
            sort_property: "Published Date".to_string(),
            page_size: MAX_PAGE_SIZE,
            max_retries: 3,
            retry_delay_ms: 500,
        }
    }
}

impl fmt::Debug for NotionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotionSettings")
            .field("token", &if self.token.is_empty() { "" } else { "<redacted>" })
            .field("database_id", &self.database_id)
            .field("api_base", &self.api_base)
            .field("api_version", &self.api_version)
            .field("status_property", &self.status_property)
            .field("published_value", &self.published_value)
            .field("sort_property", &self.sort_property)
            .field("page_size", &self.page_size)
            .field("max_retries", &self.max_retries)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .finish()
    }
}

impl NotionSettings {
    /// Settings for `database_id` authenticated with `token`; all else default.
    pub fn new(token: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            database_id: database_id.into(),
            ..Self::default()
        }
    }

    /// Check that the settings can be used to build a client.
    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(Error::config(
                "Notion token is not set (notion.token or NOTION_TOKEN)",
            ));
        }
        if self.database_id.trim().is_empty() {
            return Err(Error::config(
                "Notion database id is not set (notion.database_id or NOTION_DATABASE_ID)",
            ));
        }
        if self.api_base.trim().is_empty() {
            return Err(Error::config("notion.api_base must not be empty"));
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(Error::config(format!(
                "notion.page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.page_size
            )));
        }
        Ok(())
    }
}

// ============================================================================
// Client
// ============================================================================

/// Client for one Notion database.
#[derive(Debug, Clone)]
pub struct NotionClient {
    http: reqwest::Client,
    settings: NotionSettings,
}

impl NotionClient {
    /// Build a client, validating `settings` first.
    pub fn new(settings: NotionSettings) -> Result<Self> {
        settings.validate()?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", settings.token))
            .map_err(|_| Error::config("Notion token contains characters not allowed in a header"))?;
        auth.set_sensitive(true);
        let version = HeaderValue::from_str(&settings.api_version)
            .map_err(|_| Error::config("notion.api_version is not a valid header value"))?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(HeaderName::from_static(NOTION_VERSION_HEADER), version);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, settings })
    }

    /// The settings this client was built with.
    pub fn settings(&self) -> &NotionSettings {
        &self.settings
    }

    /// All published rows of the database, newest first.
    pub async fn query_published(&self) -> Result<Vec<SourceDocument>> {
        let url = format!(
            "{}/databases/{}/query",
            self.api_base(),
            self.settings.database_id
        );
        let filter = json!({
            "property": self.settings.status_property,
            "select": { "equals": self.settings.published_value },
        });

        let mut documents = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let body = QueryRequest {
                filter: filter.clone(),
                sorts: [SortSpec {
                    property: &self.settings.sort_property,
                    direction: "descending",
                }],
                page_size: self.settings.page_size,
                start_cursor: cursor.as_deref(),
            };
            let page: ListResponse<WirePage> = self
                .send_json(|| self.http.post(&url).json(&body))
                .await?;

            let next = page.next_page().map(str::to_owned);
            tracing::debug!(
                results = page.results.len(),
                has_more = next.is_some(),
                "Fetched database page"
            );
            documents.extend(page.results.into_iter().map(WirePage::into_document));

            match next {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        tracing::info!(count = documents.len(), "Queried published documents");
        Ok(documents)
    }

    /// Top-level blocks of a page, in document order.
    pub async fn block_children(&self, page_id: &str) -> Result<Vec<Block>> {
        let url = format!("{}/blocks/{}/children", self.api_base(), page_id);
        let page_size = self.settings.page_size.to_string();

        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let mut query: Vec<(&str, &str)> = vec![("page_size", page_size.as_str())];
            if let Some(cursor) = cursor.as_deref() {
                query.push(("start_cursor", cursor));
            }
            let page: ListResponse<Value> = self
                .send_json(|| self.http.get(&url).query(&query))
                .await?;

            let next = page.next_page().map(str::to_owned);
            blocks.extend(page.results.into_iter().map(decode_block));

            match next {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        tracing::debug!(page_id = %page_id, count = blocks.len(), "Fetched blocks");
        Ok(blocks)
    }

    fn api_base(&self) -> &str {
        self.settings.api_base.trim_end_matches('/')
    }

    fn backoff(&self) -> ExponentialBuilder {
        ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(self.settings.retry_delay_ms))
            .with_max_times(self.settings.max_retries)
    }

    /// Send the request produced by `build`, retrying transient failures.
    async fn send_json<T, F>(&self, build: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: Fn() -> reqwest::RequestBuilder,
    {
        let build = &build;
        let attempt = move || async move {
            let response = build().send().await?;
            decode_response(response).await
        };

        attempt
            .retry(self.backoff())
            .when(Error::is_retryable)
            .notify(|err: &Error, delay: Duration| {
                tracing::warn!(error = %err, delay_ms = delay.as_millis() as u64, "Retrying Notion request");
            })
            .await
    }
}

/// Map a response to its decoded body or an [`Error::Api`].
async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let bytes = response.bytes().await?;

    if !status.is_success() {
        let body: ApiErrorBody = serde_json::from_slice(&bytes).unwrap_or_default();
        let message = if body.message.is_empty() {
            status.canonical_reason().unwrap_or("unknown error").to_string()
        } else {
            body.message
        };
        return Err(Error::Api {
            status: status.as_u16(),
            code: body.code,
            message,
        });
    }

    Ok(serde_json::from_slice(&bytes)?)
}

// ============================================================================
// Tests
// ============================================================================
