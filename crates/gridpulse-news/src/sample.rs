//! Built-in fallback articles, served when every live source fails.

use chrono::{DateTime, Utc};

use gridpulse_core::records::NewsArticle;

fn ts(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Fixed fallback articles. Timestamps are constants so repeated fallback
/// reads are identical.
#[must_use]
pub fn fallback_articles() -> Vec<NewsArticle> {
    vec![
        NewsArticle {
            title: "Germany Sets New Renewable Energy Record in 2024".to_string(),
            link: "https://www.reuters.com/energy".to_string(),
            summary: "Renewable sources provided over 60% of Germany's electricity in 2024..."
                .to_string(),
            source: "Reuters Energy".to_string(),
            published: ts(1_731_909_600), // 2024-11-18T06:00:00Z
            category: "Renewables".to_string(),
        },
        NewsArticle {
            title: "India-Bangladesh Electricity Trade Surges".to_string(),
            link: "https://www.iea.org/news".to_string(),
            summary: "Cross-border electricity trade between India and Bangladesh \
                      increased by 25%..."
                .to_string(),
            source: "IEA News".to_string(),
            published: ts(1_731_902_400), // 2024-11-18T04:00:00Z
            category: "Trade".to_string(),
        },
        NewsArticle {
            title: "European Grid Faces Summer Demand Surge".to_string(),
            link: "https://www.carbonbrief.org/feed".to_string(),
            summary: "Grid operators prepare for peak summer demand as air conditioning \
                      usage rises..."
                .to_string(),
            source: "Carbon Brief".to_string(),
            published: ts(1_731_895_200), // 2024-11-18T02:00:00Z
            category: "Grid Operations".to_string(),
        },
    ]
}
