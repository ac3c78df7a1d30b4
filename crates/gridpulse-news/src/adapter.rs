//! Cascade adapters for the news category.

use futures::future::BoxFuture;

use gridpulse_core::cascade::{NoData, SourceAdapter, SourceResult};
use gridpulse_core::records::NewsArticle;
use gridpulse_core::{AppConfig, Query};

use crate::error::NewsError;
use crate::newsapi::NewsApiClient;
use crate::pipeline::collect_feed_articles;
use crate::rss::{FeedSpec, FEEDS};

fn no_data_kind(err: &NewsError) -> NoData {
    match err {
        NewsError::Http(e) if e.status().is_some() => NoData::Status,
        NewsError::Http(_) | NewsError::Config(_) => NoData::Transport,
        NewsError::Xml { .. } | NewsError::Deserialize { .. } => NoData::Malformed,
    }
}

/// Primary news tier: NewsAPI headlines. Skipped when no key is configured.
pub struct NewsApiAdapter {
    client: Option<NewsApiClient>,
}

impl NewsApiAdapter {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let client = config.newsapi_key.as_deref().and_then(|key| {
            NewsApiClient::new(key, config.request_timeout_secs, &config.user_agent).ok()
        });
        Self { client }
    }

    /// Test seam: wraps an already-constructed client.
    #[must_use]
    pub fn with_client(client: NewsApiClient) -> Self {
        Self {
            client: Some(client),
        }
    }
}

impl SourceAdapter<NewsArticle> for NewsApiAdapter {
    fn name(&self) -> &'static str {
        "newsapi_headlines"
    }

    fn fetch<'a>(&'a self, _query: &'a Query) -> BoxFuture<'a, SourceResult<NewsArticle>> {
        Box::pin(async move {
            let Some(client) = &self.client else {
                return SourceResult::NoData(NoData::MissingCredential);
            };
            match client.energy_headlines().await {
                Ok(articles) => SourceResult::from_records(articles),
                Err(e) => {
                    tracing::warn!(tier = "newsapi_headlines", error = %e, "NewsAPI fetch failed");
                    SourceResult::NoData(no_data_kind(&e))
                }
            }
        })
    }
}

struct OwnedFeed {
    name: String,
    url: String,
    site: String,
}

/// Secondary news tier: curated RSS feeds with a per-feed page-scrape
/// fallback. The whole tier reports no data only when every feed and every
/// scrape comes up empty.
pub struct FeedScrapeAdapter {
    http: Option<reqwest::Client>,
    feeds: Vec<OwnedFeed>,
}

impl FeedScrapeAdapter {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(std::time::Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .build()
            .ok();
        Self {
            http,
            feeds: FEEDS.iter().map(OwnedFeed::from_spec).collect(),
        }
    }

    /// Test seam: a caller-supplied HTTP client and feed list.
    #[must_use]
    pub fn with_feeds(http: reqwest::Client, feeds: &[FeedSpec<'_>]) -> Self {
        Self {
            http: Some(http),
            feeds: feeds.iter().map(OwnedFeed::from_spec).collect(),
        }
    }
}

impl OwnedFeed {
    fn from_spec(spec: &FeedSpec<'_>) -> Self {
        Self {
            name: spec.name.to_string(),
            url: spec.url.to_string(),
            site: spec.site.to_string(),
        }
    }
}

impl SourceAdapter<NewsArticle> for FeedScrapeAdapter {
    fn name(&self) -> &'static str {
        "energy_feed_scrape"
    }

    fn fetch<'a>(&'a self, _query: &'a Query) -> BoxFuture<'a, SourceResult<NewsArticle>> {
        Box::pin(async move {
            let Some(http) = &self.http else {
                return SourceResult::NoData(NoData::Transport);
            };
            let specs: Vec<FeedSpec<'_>> = self
                .feeds
                .iter()
                .map(|f| FeedSpec {
                    name: &f.name,
                    url: &f.url,
                    site: &f.site,
                })
                .collect();
            SourceResult::from_records(collect_feed_articles(http, &specs).await)
        })
    }
}
