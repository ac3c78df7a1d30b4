//! NewsAPI client (key-authenticated), the primary news tier.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::{Client, Url};
use serde::Deserialize;

use gridpulse_core::records::NewsArticle;

use crate::categorize::categorize;
use crate::error::NewsError;

const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2/";

const ENERGY_QUERY: &str = "(energy OR electricity OR \"power grid\" OR renewables)";
const PAGE_SIZE: &str = "25";

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    articles: Vec<WireArticle>,
}

#[derive(Debug, Deserialize)]
struct WireArticle {
    title: Option<String>,
    url: Option<String>,
    description: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
    source: Option<WireSource>,
}

#[derive(Debug, Deserialize)]
struct WireSource {
    name: Option<String>,
}

/// Client for the NewsAPI `everything` search endpoint.
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl NewsApiClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, NewsError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`NewsError::Config`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, NewsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| NewsError::Config(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Latest English-language energy-sector headlines, newest first as the
    /// API returns them. Rows missing a title or URL are dropped.
    ///
    /// # Errors
    ///
    /// [`NewsError::Http`] on transport failure or non-2xx status,
    /// [`NewsError::Deserialize`] on an unexpected body shape.
    pub async fn energy_headlines(&self) -> Result<Vec<NewsArticle>, NewsError> {
        let mut url = self
            .base_url
            .join("everything")
            .map_err(|e| NewsError::Config(format!("invalid endpoint path 'everything': {e}")))?;
        url.query_pairs_mut()
            .append_pair("q", ENERGY_QUERY)
            .append_pair("language", "en")
            .append_pair("sortBy", "publishedAt")
            .append_pair("pageSize", PAGE_SIZE)
            .append_pair("apiKey", &self.api_key);

        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let parsed: Envelope = serde_json::from_str(&body).map_err(|e| NewsError::Deserialize {
            context: url.to_string(),
            source: e,
        })?;

        Ok(parsed
            .articles
            .into_iter()
            .filter_map(|wire| {
                let title = wire.title?;
                let link = wire.url?;
                let summary = wire.description.unwrap_or_default();
                let published = wire
                    .published_at
                    .as_deref()
                    .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
                    .map(|dt| dt.with_timezone(&Utc))
                    .unwrap_or(DateTime::UNIX_EPOCH);
                let source = wire
                    .source
                    .and_then(|s| s.name)
                    .unwrap_or_else(|| "NewsAPI".to_string());
                Some(NewsArticle {
                    category: categorize(&title, &summary).to_string(),
                    title,
                    link,
                    summary,
                    source,
                    published,
                })
            })
            .collect())
    }
}
