//! Energy-sector news acquisition.
//!
//! Two live tiers feed the news cascade: NewsAPI (key-authenticated) and a
//! curated feed list where each feed independently falls back to scraping
//! its landing page. Every article is categorized against an ordered
//! keyword table before leaving this crate.

pub mod adapter;
pub mod categorize;
pub mod error;
pub mod newsapi;
pub mod pipeline;
pub mod rss;
pub mod sample;
pub mod scrape;

pub use adapter::{FeedScrapeAdapter, NewsApiAdapter};
pub use categorize::{categorize, DEFAULT_CATEGORY};
pub use error::NewsError;
pub use newsapi::NewsApiClient;
pub use pipeline::collect_feed_articles;
pub use rss::{FeedSpec, FEEDS};
pub use sample::fallback_articles;
