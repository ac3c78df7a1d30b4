//! Integration tests for the news tiers, using wiremock HTTP mocks.

use gridpulse_core::{AdapterChain, Category, Query};
use gridpulse_news::{
    collect_feed_articles, fallback_articles, FeedScrapeAdapter, FeedSpec, NewsApiClient,
    NewsApiAdapter,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn http() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent("gridpulse-test/0.1")
        .build()
        .expect("client construction should not fail")
}

// Items deliberately out of order by pubDate.
const FEED_XML: &str = r#"<?xml version="1.0"?>
<rss version="2.0">
  <channel>
    <item>
      <title>Interconnector auction results published</title>
      <link>https://example.com/auction-results</link>
      <description>Cross-border capacity cleared above last year.</description>
      <pubDate>Mon, 17 Nov 2025 12:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Solar output sets a midday record</title>
      <link>https://example.com/solar-record</link>
      <description>Clear skies pushed solar past half of demand.</description>
      <pubDate>Wed, 19 Nov 2025 12:00:00 GMT</pubDate>
    </item>
    <item>
      <title>Reserve margins tighten ahead of cold snap</title>
      <link>https://example.com/reserve-margins</link>
      <description>Operators warned of tighter margins this week.</description>
      <pubDate>Tue, 18 Nov 2025 12:00:00 GMT</pubDate>
    </item>
  </channel>
</rss>"#;

#[tokio::test]
async fn newsapi_parses_and_categorizes_headlines() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "status": "ok",
        "articles": [
            {
                "title": "Offshore wind hub approved",
                "url": "https://example.com/wind-hub",
                "description": "A new offshore hub got the green light.",
                "publishedAt": "2025-11-18T10:00:00Z",
                "source": { "name": "Example Wire" }
            },
            {
                "title": null,
                "url": "https://example.com/broken"
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/everything"))
        .and(query_param("language", "en"))
        .and(query_param("sortBy", "publishedAt"))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = NewsApiClient::with_base_url("test-key", 30, "gridpulse-test/0.1", &server.uri())
        .expect("client construction should not fail");
    let articles = client
        .energy_headlines()
        .await
        .expect("should parse headlines");

    assert_eq!(articles.len(), 1, "rows without a title are dropped");
    assert_eq!(articles[0].category, "Renewables");
    assert_eq!(articles[0].source, "Example Wire");
}

#[tokio::test]
async fn feed_collection_sorts_newest_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED_XML))
        .mount(&server)
        .await;

    let feed_url = format!("{}/feed", server.uri());
    let feeds = [FeedSpec {
        name: "Example",
        url: &feed_url,
        site: &server.uri(),
    }];
    let articles = collect_feed_articles(&http(), &feeds).await;

    assert_eq!(articles.len(), 3);
    assert_eq!(articles[0].title, "Solar output sets a midday record");
    assert_eq!(articles[1].title, "Reserve margins tighten ahead of cold snap");
    assert_eq!(articles[2].title, "Interconnector auction results published");
    assert!(articles[0].published > articles[1].published);
    assert!(articles[1].published > articles[2].published);
}

#[tokio::test]
async fn broken_feed_falls_back_to_page_scrape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<div class="story"><h2>Grid upgrade funded</h2>
               <a href="/stories/grid-upgrade">read</a>
               <p>The transmission upgrade got funding approval.</p></div>"#,
        ))
        .mount(&server)
        .await;

    let feed_url = format!("{}/feed", server.uri());
    let site_url = format!("{}/news", server.uri());
    let feeds = [FeedSpec {
        name: "Example",
        url: &feed_url,
        site: &site_url,
    }];
    let articles = collect_feed_articles(&http(), &feeds).await;

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title, "Grid upgrade funded");
    assert_eq!(articles[0].category, "Grid Operations");
    assert!(articles[0].link.ends_with("/stories/grid-upgrade"));
}

#[tokio::test]
async fn news_chain_skips_unkeyed_primary_and_uses_feeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/feed"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED_XML))
        .mount(&server)
        .await;

    let feed_url = format!("{}/feed", server.uri());
    let feeds = [FeedSpec {
        name: "Example",
        url: &feed_url,
        site: &server.uri(),
    }];

    let chain = AdapterChain::new(Category::News)
        .tier(Box::new(NewsApiAdapter::from_config(
            &gridpulse_core::AppConfig {
                log_level: "info".to_string(),
                user_agent: "gridpulse-test/0.1".to_string(),
                request_timeout_secs: 30,
                entsoe_token: None,
                emaps_token: None,
                iea_api_key: None,
                newsapi_key: None,
                commodity_endpoint: None,
            },
        )))
        .tier(Box::new(FeedScrapeAdapter::with_feeds(http(), &feeds)))
        .sample(fallback_articles());

    let articles = chain.resolve(&Query::new(Category::News)).await;

    assert_eq!(articles.len(), 3, "feed tier should win, not the sample");
    assert_eq!(articles[0].title, "Solar output sets a midday record");
}

#[tokio::test]
async fn all_news_tiers_down_serves_fallback_articles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let feed_url = format!("{}/feed", server.uri());
    let site_url = format!("{}/site", server.uri());
    let feeds = [FeedSpec {
        name: "Example",
        url: &feed_url,
        site: &site_url,
    }];

    let chain = AdapterChain::new(Category::News)
        .tier(Box::new(FeedScrapeAdapter::with_feeds(http(), &feeds)))
        .sample(fallback_articles());

    let articles = chain.resolve(&Query::new(Category::News)).await;
    assert_eq!(articles, fallback_articles());
}
