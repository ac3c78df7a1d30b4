//! Cascade adapters for commodity prices and the interconnection catalog.

use futures::future::BoxFuture;

use gridpulse_core::cascade::{NoData, SourceAdapter, SourceResult};
use gridpulse_core::records::{CommodityPrices, Interconnection};
use gridpulse_core::{AppConfig, Query};

use crate::commodity::CommodityClient;
use crate::error::MarketsError;
use crate::interconnections::{global_interconnections, interconnections_in_region};

fn no_data_kind(err: &MarketsError) -> NoData {
    match err {
        MarketsError::Http(e) if e.status().is_some() => NoData::Status,
        MarketsError::Http(_) | MarketsError::Config(_) => NoData::Transport,
        MarketsError::Deserialize { .. } => NoData::Malformed,
    }
}

/// Live commodity-quote tier. Chains end on the static sample, so this tier
/// failing is routine rather than an error.
pub struct CommodityAdapter {
    client: Option<CommodityClient>,
}

impl CommodityAdapter {
    /// Built without a client when no quote endpoint is configured, leaving
    /// the tier permanently dark so chains go straight to the sample.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let client = config.commodity_endpoint.as_deref().and_then(|endpoint| {
            CommodityClient::new(endpoint, config.request_timeout_secs, &config.user_agent).ok()
        });
        Self { client }
    }

    /// Wraps a quote client; pass `None` to leave the tier permanently dark.
    #[must_use]
    pub fn new(client: Option<CommodityClient>) -> Self {
        Self { client }
    }
}

impl SourceAdapter<CommodityPrices> for CommodityAdapter {
    fn name(&self) -> &'static str {
        "commodity_prices"
    }

    fn fetch<'a>(&'a self, _query: &'a Query) -> BoxFuture<'a, SourceResult<CommodityPrices>> {
        Box::pin(async move {
            let Some(client) = &self.client else {
                return SourceResult::NoData(NoData::Transport);
            };
            match client.latest_prices().await {
                Ok(prices) => SourceResult::from_records(vec![prices]),
                Err(e) => {
                    tracing::warn!(tier = "commodity_prices", error = %e, "commodity fetch failed");
                    SourceResult::NoData(no_data_kind(&e))
                }
            }
        })
    }
}

/// Static interconnection catalog, optionally filtered by a `region` param.
/// Filtering to an unknown region yields no data, not an error.
pub struct InterconnectionCatalogAdapter;

impl SourceAdapter<Interconnection> for InterconnectionCatalogAdapter {
    fn name(&self) -> &'static str {
        "interconnection_catalog"
    }

    fn fetch<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, SourceResult<Interconnection>> {
        Box::pin(async move {
            let links = match query.param("region") {
                Some(region) => interconnections_in_region(region),
                None => global_interconnections(),
            };
            SourceResult::from_records(links)
        })
    }
}
