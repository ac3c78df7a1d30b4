//! Keyword-table article categorization.

/// Ordered category table.
///
/// Keys are lowercase substrings matched against the concatenated title and
/// summary. The first category with any matching keyword wins, so earlier
/// rows take precedence over later ones. Articles matching nothing fall
/// through to [`DEFAULT_CATEGORY`].
pub(crate) const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Grid Operations",
        &["grid", "frequency", "demand", "load", "transmission", "outage"],
    ),
    (
        "Renewables",
        &["wind", "solar", "renewable", "clean energy", "hydroelectric"],
    ),
    (
        "Policy",
        &["policy", "regulation", "government", "tariff", "subsidy", "legislation"],
    ),
    (
        "Trade",
        &["export", "import", "trade", "cross-border", "international"],
    ),
    (
        "Prices",
        &["price", "cost", "market", "bid", "auction"],
    ),
    (
        "Technology",
        &["technology", "battery", "storage", "smart grid", "ai", "digital"],
    ),
];

/// Category assigned when no keyword matches.
pub const DEFAULT_CATEGORY: &str = "General";

/// Assign a category to an article from its title and summary.
///
/// Matching is case-insensitive substring search over the ordered keyword
/// table; ties between categories are broken by table order.
#[must_use]
pub fn categorize(title: &str, summary: &str) -> &'static str {
    let haystack = format!("{title} {summary}").to_lowercase();
    for &(category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|kw| haystack.contains(kw)) {
            return category;
        }
    }
    DEFAULT_CATEGORY
}
