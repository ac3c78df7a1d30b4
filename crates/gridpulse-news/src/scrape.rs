//! Heuristic HTML page scraping, used when a feed is down or empty.
//!
//! This is deliberately crude: it looks for `article`-shaped blocks, pulls a
//! heading or anchor text as the title, and takes the first paragraph as the
//! summary. Scraped pages carry no reliable timestamp, so scraped articles
//! get the Unix epoch and sort behind feed items.

use chrono::DateTime;
use regex::Regex;
use reqwest::Url;

use gridpulse_core::records::NewsArticle;

use crate::categorize::categorize;
use crate::error::NewsError;
use crate::rss::strip_html;

const MAX_SCRAPED_ITEMS: usize = 10;
const MAX_SUMMARY_CHARS: usize = 200;

/// Fetch a landing page and scrape article stubs out of it.
///
/// # Errors
///
/// Returns [`NewsError::Http`] on network failure or non-2xx status.
pub async fn scrape_page(
    client: &reqwest::Client,
    url: &str,
    source: &str,
) -> Result<Vec<NewsArticle>, NewsError> {
    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(extract_articles(&body, url, source))
}

/// Extract article stubs from raw HTML.
///
/// Relative links are resolved against `base`. Blocks without a link, or
/// with an empty title after tag stripping, are skipped. At most
/// [`MAX_SCRAPED_ITEMS`] articles are returned.
#[must_use]
pub fn extract_articles(html: &str, base: &str, source: &str) -> Vec<NewsArticle> {
    let block_re = Regex::new(
        r#"(?is)<(?:article|div)[^>]*class\s*=\s*["'][^"']*(?:article|story|news-item)[^"']*["'][^>]*>(.*?)</(?:article|div)>"#,
    )
    .expect("valid block regex");
    let heading_re =
        Regex::new(r"(?is)<h[1-3][^>]*>(.*?)</h[1-3]>").expect("valid heading regex");
    let link_re = Regex::new(r#"(?is)<a[^>]+href\s*=\s*["']([^"']+)["'][^>]*>(.*?)</a>"#)
        .expect("valid link regex");
    let para_re = Regex::new(r"(?is)<p[^>]*>(.*?)</p>").expect("valid paragraph regex");

    let mut articles = Vec::new();
    for block in block_re.captures_iter(html) {
        let Some(inner) = block.get(1).map(|m| m.as_str()) else {
            continue;
        };

        let Some(link_cap) = link_re.captures(inner) else {
            continue;
        };
        let href = link_cap.get(1).map(|m| m.as_str().trim()).unwrap_or("");
        if href.is_empty() || href.starts_with('#') || href.starts_with("javascript:") {
            continue;
        }
        let Some(link) = resolve_link(href, base) else {
            continue;
        };

        // Prefer a heading; fall back to the anchor text.
        let title = heading_re
            .captures(inner)
            .and_then(|c| c.get(1))
            .map(|m| strip_html(m.as_str()))
            .filter(|t| !t.is_empty())
            .or_else(|| {
                link_cap
                    .get(2)
                    .map(|m| strip_html(m.as_str()))
                    .filter(|t| !t.is_empty())
            });
        let Some(title) = title else {
            continue;
        };

        let summary = para_re
            .captures(inner)
            .and_then(|c| c.get(1))
            .map(|m| truncate_chars(&strip_html(m.as_str()), MAX_SUMMARY_CHARS))
            .unwrap_or_default();

        articles.push(NewsArticle {
            category: categorize(&title, &summary).to_string(),
            title,
            link,
            summary,
            source: source.to_string(),
            published: DateTime::UNIX_EPOCH,
        });
        if articles.len() >= MAX_SCRAPED_ITEMS {
            break;
        }
    }

    articles
}

fn resolve_link(href: &str, base: &str) -> Option<String> {
    if href.starts_with("http://") || href.starts_with("https://") {
        return Some(href.to_string());
    }
    Url::parse(base)
        .ok()?
        .join(href)
        .ok()
        .map(|u| u.to_string())
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"<html><body>
      <div class="header">ignore me</div>
      <article class="story-card">
        <h2>Battery storage pipeline triples</h2>
        <a href="/news/battery-pipeline">Read more</a>
        <p>Developers have <b>tripled</b> the utility-scale battery pipeline this year.</p>
      </article>
      <div class="news-item">
        <a href="https://other.example.com/absolute">Imports surge on cheap hydro</a>
      </div>
      <div class="sidebar"><a href="/not-an-article">nope</a></div>
    </body></html>"#;

    #[test]
    fn extracts_article_blocks_only() {
        let articles = extract_articles(SAMPLE_HTML, "https://example.com/energy/", "Example");
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Battery storage pipeline triples");
        assert_eq!(articles[0].category, "Technology");
        assert_eq!(articles[1].title, "Imports surge on cheap hydro");
        assert_eq!(articles[1].category, "Trade");
    }

    #[test]
    fn relative_links_resolve_against_base() {
        let articles = extract_articles(SAMPLE_HTML, "https://example.com/energy/", "Example");
        assert_eq!(articles[0].link, "https://example.com/news/battery-pipeline");
        assert_eq!(articles[1].link, "https://other.example.com/absolute");
    }

    #[test]
    fn summary_is_tag_stripped_and_bounded() {
        let articles = extract_articles(SAMPLE_HTML, "https://example.com/", "Example");
        assert!(articles[0].summary.starts_with("Developers have tripled"));
        assert!(articles[0].summary.chars().count() <= 200);
    }

    #[test]
    fn blocks_without_links_are_skipped() {
        let html = r#"<article class="story"><h2>No link here</h2></article>"#;
        assert!(extract_articles(html, "https://example.com/", "x").is_empty());
    }

    #[test]
    fn output_is_capped() {
        let mut html = String::new();
        for i in 0..15 {
            html.push_str(&format!(
                r#"<div class="story"><a href="/a{i}">story {i}</a></div>"#
            ));
        }
        let articles = extract_articles(&html, "https://example.com/", "x");
        assert_eq!(articles.len(), 10);
    }
}
