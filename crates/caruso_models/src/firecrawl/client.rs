//! Firecrawl scrape API client.

use async_trait::async_trait;
use caruso_error::{CarusoResult, ExtractionError, ExtractionErrorKind};
use caruso_interface::ContentExtractor;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::instrument;

const DEFAULT_BASE_URL: &str = "https://api.firecrawl.dev";

/// Client for the Firecrawl scrape API.
///
/// Requests the markdown rendering of a page's main content, which is what
/// the script writer consumes downstream.
#[derive(Clone)]
pub struct FirecrawlClient {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for FirecrawlClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirecrawlClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &self.api_key.is_some())
            .finish_non_exhaustive()
    }
}

/// Body of a scrape request.
#[derive(Debug, Serialize)]
struct ScrapeRequest<'a> {
    url: &'a str,
    formats: &'a [&'a str],
    #[serde(rename = "onlyMainContent")]
    only_main_content: bool,
}

/// Payload of a scrape response.
#[derive(Debug, Deserialize)]
struct ScrapeResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<ScrapeData>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ScrapeData {
    #[serde(default)]
    markdown: Option<String>,
}

impl FirecrawlClient {
    /// Create a client, reading the API key from `FIRECRAWL_API_KEY`.
    ///
    /// A missing key is not an error here; extraction calls fail with
    /// `MissingApiKey` until one is configured.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("FIRECRAWL_API_KEY").ok(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create a client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn api_key(&self) -> Result<&str, ExtractionError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| ExtractionError::new(ExtractionErrorKind::MissingApiKey))
    }
}

impl Default for FirecrawlClient {
    fn default() -> Self {
        Self::from_env()
    }
}

#[async_trait]
impl ContentExtractor for FirecrawlClient {
    #[instrument(skip(self))]
    async fn extract(&self, url: &str) -> CarusoResult<String> {
        let api_key = self.api_key()?;
        let endpoint = format!("{}/v1/scrape", self.base_url);

        let body = ScrapeRequest {
            url,
            formats: &["markdown"],
            only_main_content: true,
        };

        tracing::debug!(url, endpoint = %endpoint, "Scraping blog content");

        let response = self
            .client
            .post(&endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ExtractionError::new(ExtractionErrorKind::ApiRequest(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ExtractionError::new(ExtractionErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        let scrape: ScrapeResponse = response.json().await.map_err(|e| {
            ExtractionError::new(ExtractionErrorKind::Deserialization(e.to_string()))
        })?;

        if !scrape.success {
            let message = scrape.error.unwrap_or_else(|| "scrape unsuccessful".to_string());
            return Err(
                ExtractionError::new(ExtractionErrorKind::ApiRequest(message)).into(),
            );
        }

        let markdown = scrape
            .data
            .and_then(|data| data.markdown)
            .filter(|markdown| !markdown.trim().is_empty())
            .ok_or_else(|| {
                ExtractionError::new(ExtractionErrorKind::EmptyContent(url.to_string()))
            })?;

        tracing::debug!(url, chars = markdown.len(), "Scraped blog content");
        Ok(markdown)
    }

    fn provider_name(&self) -> &'static str {
        "firecrawl"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_api_key_fails_at_call_time() {
        let client = FirecrawlClient {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        };

        let err = client.extract("https://example.com/post").await.unwrap_err();
        assert!(format!("{err}").contains("FIRECRAWL_API_KEY"));
    }

    #[test]
    fn scrape_request_serializes_camel_case() {
        let body = ScrapeRequest {
            url: "https://example.com/post",
            formats: &["markdown"],
            only_main_content: true,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["onlyMainContent"], true);
        assert_eq!(json["formats"][0], "markdown");
    }
}
