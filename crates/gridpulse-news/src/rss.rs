//! RSS/Atom feed fetching and parsing.

use chrono::{DateTime, Utc};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use gridpulse_core::records::NewsArticle;

use crate::categorize::categorize;
use crate::error::NewsError;

/// Items kept per feed.
const PER_FEED_LIMIT: usize = 10;

/// A curated feed: RSS endpoint plus the landing page the scrape fallback
/// targets when the feed itself is down or empty.
#[derive(Debug, Clone, Copy)]
pub struct FeedSpec<'a> {
    pub name: &'a str,
    pub url: &'a str,
    pub site: &'a str,
}

/// Curated energy-sector feeds.
pub const FEEDS: &[FeedSpec<'static>] = &[
    FeedSpec {
        name: "Reuters Energy",
        url: "https://feeds.reuters.com/reuters/businessNews",
        site: "https://www.reuters.com/business/energy/",
    },
    FeedSpec {
        name: "IEA News",
        url: "https://www.iea.org/rss",
        site: "https://www.iea.org/news",
    },
    FeedSpec {
        name: "Carbon Brief",
        url: "https://www.carbonbrief.org/feed",
        site: "https://www.carbonbrief.org/",
    },
];

/// Fetch one RSS feed and parse it into articles.
///
/// # Errors
///
/// Returns [`NewsError::Http`] on network failure or non-2xx status, or
/// [`NewsError::Xml`] on malformed XML.
pub async fn fetch_feed(
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
    parse_feed(&body, source)
}

/// Parse an RSS or Atom feed body into at most [`PER_FEED_LIMIT`] articles.
///
/// RSS links are element text; Atom links are `href` attributes on
/// (usually self-closing) `<link>` elements. Items without a link are
/// dropped. Dates are parsed as RFC 2822 with an RFC 3339 fallback; items
/// with no parseable date get the Unix epoch so they sort last.
///
/// # Errors
///
/// Returns [`NewsError::Xml`] if the XML is malformed.
pub fn parse_feed(xml: &str, source: &str) -> Result<Vec<NewsArticle>, NewsError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut articles = Vec::new();
    let mut current_title = String::new();
    let mut current_link = String::new();
    let mut current_description = String::new();
    let mut current_pub_date = String::new();
    let mut in_item = false;
    let mut current_tag = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = std::str::from_utf8(e.name().as_ref())
                    .unwrap_or("")
                    .to_string();
                match name.as_str() {
                    "item" | "entry" => {
                        in_item = true;
                        current_title.clear();
                        current_link.clear();
                        current_description.clear();
                        current_pub_date.clear();
                    }
                    "link" if in_item => {
                        if let Some(href) = atom_link_href(&e) {
                            current_link = href;
                        }
                        current_tag = name;
                    }
                    _ => {
                        current_tag = name;
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                // Atom links are self-closing elements carrying an href
                // attribute, never element text.
                if in_item && e.name().as_ref() == b"link" {
                    if let Some(href) = atom_link_href(&e) {
                        current_link = href;
                    }
                }
            }
            Ok(Event::End(e)) => {
                let raw = e.name();
                let name = std::str::from_utf8(raw.as_ref()).unwrap_or("");
                if matches!(name, "item" | "entry") && in_item {
                    in_item = false;
                    if !current_link.is_empty() {
                        articles.push(NewsArticle {
                            category: categorize(&current_title, &current_description)
                                .to_string(),
                            title: current_title.clone(),
                            link: current_link.clone(),
                            summary: current_description.clone(),
                            source: source.to_string(),
                            published: parse_pub_date(&current_pub_date),
                        });
                        if articles.len() >= PER_FEED_LIMIT {
                            break;
                        }
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if in_item {
                    let text = e.unescape().unwrap_or_default().into_owned();
                    assign_field(
                        &current_tag,
                        text,
                        &mut current_title,
                        &mut current_link,
                        &mut current_description,
                        &mut current_pub_date,
                    );
                }
            }
            Ok(Event::CData(e)) => {
                if in_item {
                    let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                    assign_field(
                        &current_tag,
                        text,
                        &mut current_title,
                        &mut current_link,
                        &mut current_description,
                        &mut current_pub_date,
                    );
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(NewsError::Xml {
                    context: source.to_string(),
                    source: e,
                })
            }
            _ => {}
        }
    }

    Ok(articles)
}

/// Pulls the `href` off an Atom `<link>` element. Links with a `rel` other
/// than `alternate` (self, enclosure, ...) point away from the article and
/// are ignored.
fn atom_link_href(e: &BytesStart<'_>) -> Option<String> {
    let mut href = None;
    for attr in e.attributes().flatten() {
        match attr.key.as_ref() {
            b"href" => href = attr.unescape_value().ok().map(|v| v.into_owned()),
            b"rel" if attr.value.as_ref() != b"alternate" => return None,
            _ => {}
        }
    }
    href
}

fn assign_field(
    tag: &str,
    text: String,
    title: &mut String,
    link: &mut String,
    description: &mut String,
    pub_date: &mut String,
) {
    match tag {
        "title" => *title = text,
        "link" => *link = text,
        "description" | "summary" => *description = strip_html(&text),
        "pubDate" | "published" => *pub_date = text,
        _ => {}
    }
}

fn parse_pub_date(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Strip HTML tags from a string, returning plain text.
pub(crate) fn strip_html(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(ch),
            _ => {}
        }
    }
    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Example Energy Wire</title>
    <item>
      <title>Offshore wind auction clears at record low</title>
      <link>https://example.com/wind-auction</link>
      <description><![CDATA[<p>Developers bid aggressively for seabed rights.</p>]]></description>
      <pubDate>Mon, 17 Nov 2025 09:30:00 GMT</pubDate>
    </item>
    <item>
      <title>Transmission outage hits northern corridor</title>
      <link>https://example.com/outage</link>
      <description>A substation fault cut flows for two hours.</description>
      <pubDate>Tue, 18 Nov 2025 07:00:00 GMT</pubDate>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn parses_items_with_cdata_and_html_stripped() {
        let articles = parse_feed(SAMPLE_RSS, "Example Energy Wire").expect("should parse");
        assert_eq!(articles.len(), 2);
        assert_eq!(
            articles[0].summary,
            "Developers bid aggressively for seabed rights."
        );
        assert_eq!(articles[0].source, "Example Energy Wire");
        assert_eq!(articles[0].category, "Renewables");
        assert_eq!(articles[1].category, "Grid Operations");
    }

    #[test]
    fn pub_date_parses_rfc2822() {
        let articles = parse_feed(SAMPLE_RSS, "x").expect("should parse");
        assert_eq!(articles[0].published.to_rfc3339(), "2025-11-17T09:30:00+00:00");
    }

    #[test]
    fn missing_pub_date_falls_back_to_epoch() {
        let xml = r#"<rss><channel><item><title>t</title><link>https://e.com/a</link></item></channel></rss>"#;
        let articles = parse_feed(xml, "x").expect("should parse");
        assert_eq!(articles[0].published, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn items_without_links_are_dropped() {
        let xml = r#"<rss><channel><item><title>no link</title></item></channel></rss>"#;
        let articles = parse_feed(xml, "x").expect("should parse");
        assert!(articles.is_empty());
    }

    #[test]
    fn output_is_capped_per_feed() {
        let mut xml = String::from("<rss><channel>");
        for i in 0..15 {
            xml.push_str(&format!(
                "<item><title>story {i}</title><link>https://e.com/{i}</link></item>"
            ));
        }
        xml.push_str("</channel></rss>");
        let articles = parse_feed(&xml, "x").expect("should parse");
        assert_eq!(articles.len(), 10);
    }

    #[test]
    fn strip_html_removes_tags() {
        assert_eq!(strip_html("<p>Hello <b>world</b></p>"), "Hello world");
    }

    const SAMPLE_ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Example Atom Wire</title>
  <link rel="self" href="https://example.com/atom.xml"/>
  <entry>
    <title>Battery storage tender oversubscribed</title>
    <link rel="alternate" href="https://example.com/battery-tender"/>
    <summary>Offers for the storage tender exceeded the available capacity fourfold.</summary>
    <published>2025-11-18T06:00:00Z</published>
  </entry>
  <entry>
    <title>Interconnector maintenance window announced</title>
    <link href="https://example.com/maintenance"/>
    <published>2025-11-17T06:00:00Z</published>
  </entry>
</feed>"#;

    #[test]
    fn atom_entries_take_links_from_href_attributes() {
        let articles = parse_feed(SAMPLE_ATOM, "Example Atom Wire").expect("should parse");
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].link, "https://example.com/battery-tender");
        assert_eq!(articles[1].link, "https://example.com/maintenance");
        assert_eq!(articles[0].category, "Technology");
        assert_eq!(
            articles[0].published.to_rfc3339(),
            "2025-11-18T06:00:00+00:00"
        );
    }

    #[test]
    fn atom_rel_self_links_are_ignored() {
        let xml = r#"<feed><entry>
            <title>t</title>
            <link rel="self" href="https://example.com/entry.xml"/>
            <link rel="alternate" href="https://example.com/story"/>
        </entry></feed>"#;
        let articles = parse_feed(xml, "x").expect("should parse");
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].link, "https://example.com/story");
    }
}
