//! The tiered acquisition cascade.
//!
//! Every data category is served by an [`AdapterChain`]: an ordered list of
//! [`SourceAdapter`]s (official API first, scraped alternative second) plus an
//! optional static sample set as the terminal tier. Resolution is strictly
//! first-success-wins — the chain never merges partial results from two
//! tiers, and it never fails: its worst-case output is the sample set or an
//! empty vec.

use futures::future::BoxFuture;

use crate::query::{Category, Query};

/// Why an adapter produced nothing for a query.
///
/// All kinds are treated identically by the resolver — the chain falls
/// through to the next tier regardless. The kind is carried for logging and
/// tests only; collapsing it at the chain boundary preserves the behavior of
/// sources that cannot tell "provider down" from "provider has nothing".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoData {
    /// Network, TLS, or timeout failure before a response arrived.
    Transport,
    /// The provider answered with a non-2xx status.
    Status,
    /// The response body could not be parsed.
    Malformed,
    /// A well-formed response containing no records.
    Empty,
    /// The tier requires a credential that is not configured.
    MissingCredential,
}

impl std::fmt::Display for NoData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            NoData::Transport => "transport failure",
            NoData::Status => "non-success status",
            NoData::Malformed => "malformed payload",
            NoData::Empty => "empty result set",
            NoData::MissingCredential => "missing credential",
        };
        f.write_str(s)
    }
}

/// Outcome of one adapter invocation: a non-empty ordered record sequence,
/// or an explicit no-data report. An empty `Vec` is never a success — use
/// [`SourceResult::from_records`] to enforce that at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceResult<T> {
    Records(Vec<T>),
    NoData(NoData),
}

impl<T> SourceResult<T> {
    /// Wraps a record set, mapping an empty one to [`NoData::Empty`] so the
    /// resolver can fall through instead of returning a silent empty success.
    #[must_use]
    pub fn from_records(records: Vec<T>) -> Self {
        if records.is_empty() {
            SourceResult::NoData(NoData::Empty)
        } else {
            SourceResult::Records(records)
        }
    }
}

/// One tier of a category's fallback chain.
///
/// `fetch` performs exactly one outbound request per invocation (or one per
/// independent sub-resource, e.g. one fetch per configured feed) and reports
/// every failure kind as a [`NoData`] outcome. Adapters never retry; a
/// single failed attempt is terminal for the current query.
pub trait SourceAdapter<T>: Send + Sync {
    /// Tier name used in logs, e.g. `"entsoe_api"`.
    fn name(&self) -> &'static str;

    fn fetch<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, SourceResult<T>>;
}

/// Ordered fallback chain for one data category.
///
/// Static configuration: tiers are registered at construction and never
/// mutated at runtime. Priority is purely chain order — no scoring, no
/// freshness comparison between tiers.
pub struct AdapterChain<T> {
    category: Category,
    tiers: Vec<Box<dyn SourceAdapter<T>>>,
    sample: Option<Vec<T>>,
}

impl<T: Clone> AdapterChain<T> {
    #[must_use]
    pub fn new(category: Category) -> Self {
        Self {
            category,
            tiers: Vec::new(),
            sample: None,
        }
    }

    /// Appends an adapter as the next-lower-priority tier.
    #[must_use]
    pub fn tier(mut self, adapter: Box<dyn SourceAdapter<T>>) -> Self {
        self.tiers.push(adapter);
        self
    }

    /// Sets the terminal static sample set, returned verbatim when every
    /// adapter tier reports no data.
    #[must_use]
    pub fn sample(mut self, records: Vec<T>) -> Self {
        self.sample = Some(records);
        self
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Walks the chain in priority order and returns the first tier's
    /// records. Falls through on any [`NoData`] outcome; if every tier
    /// reports no data, returns the static sample set (if configured) or an
    /// empty vec. Performs no caching across calls.
    pub async fn resolve(&self, query: &Query) -> Vec<T> {
        for adapter in &self.tiers {
            match adapter.fetch(query).await {
                SourceResult::Records(records) => {
                    tracing::debug!(
                        category = %self.category,
                        tier = adapter.name(),
                        count = records.len(),
                        "tier produced records"
                    );
                    return records;
                }
                SourceResult::NoData(kind) => {
                    tracing::warn!(
                        category = %self.category,
                        tier = adapter.name(),
                        reason = %kind,
                        "tier reported no data, falling through"
                    );
                }
            }
        }

        match &self.sample {
            Some(records) => {
                tracing::info!(
                    category = %self.category,
                    count = records.len(),
                    "all tiers exhausted, returning static sample set"
                );
                records.clone()
            }
            None => {
                tracing::info!(category = %self.category, "all tiers exhausted, no sample configured");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Stub tier with a fixed outcome and an invocation counter.
    struct StubAdapter {
        name: &'static str,
        outcome: SourceResult<String>,
        calls: AtomicUsize,
    }

    impl StubAdapter {
        fn records(name: &'static str, records: &[&str]) -> Self {
            Self {
                name,
                outcome: SourceResult::from_records(
                    records.iter().map(ToString::to_string).collect(),
                ),
                calls: AtomicUsize::new(0),
            }
        }

        fn no_data(name: &'static str, kind: NoData) -> Self {
            Self {
                name,
                outcome: SourceResult::NoData(kind),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl SourceAdapter<String> for StubAdapter {
        fn name(&self) -> &'static str {
            self.name
        }

        fn fetch<'a>(&'a self, _query: &'a Query) -> BoxFuture<'a, SourceResult<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async move { self.outcome.clone() })
        }
    }

    fn query() -> Query {
        Query::new(Category::News)
    }

    #[tokio::test]
    async fn first_successful_tier_wins_even_when_later_tiers_have_data() {
        let chain = AdapterChain::new(Category::News)
            .tier(Box::new(StubAdapter::records("primary", &["a1", "a2"])))
            .tier(Box::new(StubAdapter::records("secondary", &["b1"])));

        let records = chain.resolve(&query()).await;
        assert_eq!(records, vec!["a1".to_string(), "a2".to_string()]);
    }

    #[tokio::test]
    async fn failed_primary_falls_through_to_secondary() {
        let chain = AdapterChain::new(Category::News)
            .tier(Box::new(StubAdapter::no_data("primary", NoData::Transport)))
            .tier(Box::new(StubAdapter::records("secondary", &["b1"])));

        let records = chain.resolve(&query()).await;
        assert_eq!(records, vec!["b1".to_string()]);
    }

    #[tokio::test]
    async fn later_tiers_not_invoked_after_success() {
        let chain = AdapterChain::new(Category::News)
            .tier(Box::new(StubAdapter::records("primary", &["a1"])));
        // Keep a handle on the secondary to inspect its call count.
        let secondary = Box::leak(Box::new(StubAdapter::records("secondary", &["b1"])));
        let chain = chain.tier(Box::new(StubRef(secondary)));

        let _ = chain.resolve(&query()).await;
        assert_eq!(secondary.calls.load(Ordering::SeqCst), 0);
    }

    /// Forwarding adapter so the test can retain a reference to the stub.
    struct StubRef(&'static StubAdapter);

    impl SourceAdapter<String> for StubRef {
        fn name(&self) -> &'static str {
            self.0.name
        }

        fn fetch<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, SourceResult<String>> {
            self.0.fetch(query)
        }
    }

    #[tokio::test]
    async fn all_tiers_failing_returns_sample_verbatim() {
        let sample = vec!["s1".to_string(), "s2".to_string()];
        let chain = AdapterChain::new(Category::News)
            .tier(Box::new(StubAdapter::no_data("primary", NoData::Status)))
            .tier(Box::new(StubAdapter::no_data("secondary", NoData::Malformed)))
            .sample(sample.clone());

        let records = chain.resolve(&query()).await;
        assert_eq!(records, sample);
    }

    #[tokio::test]
    async fn all_tiers_failing_without_sample_returns_empty() {
        let chain: AdapterChain<String> = AdapterChain::new(Category::News)
            .tier(Box::new(StubAdapter::no_data("primary", NoData::Empty)));

        let records = chain.resolve(&query()).await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn missing_credential_tier_falls_through_like_any_failure() {
        let chain = AdapterChain::new(Category::News)
            .tier(Box::new(StubAdapter::no_data(
                "primary",
                NoData::MissingCredential,
            )))
            .tier(Box::new(StubAdapter::records("secondary", &["b1"])));

        let records = chain.resolve(&query()).await;
        assert_eq!(records, vec!["b1".to_string()]);
    }

    #[tokio::test]
    async fn resolve_is_idempotent_with_fixed_tiers() {
        let chain = AdapterChain::new(Category::News)
            .tier(Box::new(StubAdapter::no_data("primary", NoData::Transport)))
            .tier(Box::new(StubAdapter::records("secondary", &["b1", "b2"])));

        let first = chain.resolve(&query()).await;
        let second = chain.resolve(&query()).await;
        assert_eq!(first, second);
    }

    #[test]
    fn empty_record_set_is_never_a_success() {
        let result: SourceResult<String> = SourceResult::from_records(Vec::new());
        assert_eq!(result, SourceResult::NoData(NoData::Empty));
    }
}
