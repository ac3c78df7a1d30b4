//! Feed collection loop.

use std::collections::HashSet;

use gridpulse_core::records::NewsArticle;

use crate::rss::{fetch_feed, FeedSpec};
use crate::scrape::scrape_page;

/// Most articles returned by one collection pass.
const MAX_ARTICLES: usize = 30;

/// Collect articles from every feed, falling back to a page scrape per feed.
///
/// Each feed is independent: a failed or empty feed triggers a scrape of its
/// landing page, and a failed scrape is logged and skipped without affecting
/// the other feeds. Results are deduplicated by link, sorted newest first,
/// and capped at [`MAX_ARTICLES`]. All sources failing yields an empty `Vec`.
pub async fn collect_feed_articles(
    client: &reqwest::Client,
    feeds: &[FeedSpec<'_>],
) -> Vec<NewsArticle> {
    let mut articles = Vec::new();

    for feed in feeds {
        match fetch_feed(client, feed.url, feed.name).await {
            Ok(items) if !items.is_empty() => {
                tracing::debug!(source = feed.name, count = items.len(), "collected feed items");
                articles.extend(items);
                continue;
            }
            Ok(_) => {
                tracing::warn!(source = feed.name, "feed returned no items, scraping page");
            }
            Err(e) => {
                tracing::warn!(source = feed.name, error = %e, "feed fetch failed, scraping page");
            }
        }

        match scrape_page(client, feed.site, feed.name).await {
            Ok(items) => {
                tracing::debug!(source = feed.name, count = items.len(), "scraped page items");
                articles.extend(items);
            }
            Err(e) => {
                tracing::warn!(source = feed.name, error = %e, "page scrape failed");
            }
        }
    }

    let mut seen_links: HashSet<String> = HashSet::new();
    articles.retain(|article| seen_links.insert(article.link.clone()));

    articles.sort_by(|a, b| b.published.cmp(&a.published));
    articles.truncate(MAX_ARTICLES);
    articles
}
