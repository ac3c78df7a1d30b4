//! Cascade adapters for indicator and trade categories.
//!
//! The electricity-trade chain is the clearest two-tier cascade in the
//! system: IEA (key-authenticated) first, UN Comtrade (public) second.

use futures::future::BoxFuture;

use gridpulse_core::cascade::{NoData, SourceAdapter, SourceResult};
use gridpulse_core::records::{IndicatorPoint, TradeRecord};
use gridpulse_core::{AppConfig, Query};

use crate::comtrade::ComtradeClient;
use crate::error::StatsError;
use crate::iea::IeaClient;
use crate::worldbank::WorldBankClient;

fn no_data_kind(err: &StatsError) -> NoData {
    match err {
        StatsError::Http(e) if e.status().is_some() => NoData::Status,
        StatsError::Http(_) | StatsError::Config(_) => NoData::Transport,
        StatsError::Deserialize { .. } | StatsError::UnexpectedShape { .. } => NoData::Malformed,
    }
}

/// Single-tier adapter for World Bank indicator series. Public API, so the
/// chain has no credential gate.
pub struct WorldBankAdapter {
    client: Option<WorldBankClient>,
}

impl WorldBankAdapter {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let client = WorldBankClient::new(config.request_timeout_secs, &config.user_agent).ok();
        Self { client }
    }

    /// Test seam: wraps an already-constructed client.
    #[must_use]
    pub fn with_client(client: WorldBankClient) -> Self {
        Self {
            client: Some(client),
        }
    }
}

impl SourceAdapter<IndicatorPoint> for WorldBankAdapter {
    fn name(&self) -> &'static str {
        "worldbank_indicator"
    }

    fn fetch<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, SourceResult<IndicatorPoint>> {
        Box::pin(async move {
            let Some(client) = &self.client else {
                return SourceResult::NoData(NoData::Transport);
            };
            let country = query.param("country").unwrap_or_default();
            let indicator = query.param("indicator").unwrap_or_default();

            match client.indicator(country, indicator).await {
                Ok(points) => SourceResult::from_records(points),
                Err(e) => {
                    tracing::warn!(tier = "worldbank_indicator", error = %e, "World Bank fetch failed");
                    SourceResult::NoData(no_data_kind(&e))
                }
            }
        })
    }
}

/// Primary trade tier: IEA electricity trade records.
pub struct IeaTradeAdapter {
    client: Option<IeaClient>,
}

impl IeaTradeAdapter {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let client = config.iea_api_key.as_deref().and_then(|key| {
            IeaClient::new(key, config.request_timeout_secs, &config.user_agent).ok()
        });
        Self { client }
    }

    /// Test seam: wraps an already-constructed client.
    #[must_use]
    pub fn with_client(client: IeaClient) -> Self {
        Self {
            client: Some(client),
        }
    }
}

impl SourceAdapter<TradeRecord> for IeaTradeAdapter {
    fn name(&self) -> &'static str {
        "iea_electricity_trade"
    }

    fn fetch<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, SourceResult<TradeRecord>> {
        Box::pin(async move {
            let Some(client) = &self.client else {
                return SourceResult::NoData(NoData::MissingCredential);
            };
            let country = query.param("country").unwrap_or_default();
            let year = parse_year(query);

            match client.electricity_trade(country, year).await {
                Ok(records) => SourceResult::from_records(records),
                Err(e) => {
                    tracing::warn!(tier = "iea_electricity_trade", error = %e, "IEA fetch failed");
                    SourceResult::NoData(no_data_kind(&e))
                }
            }
        })
    }
}

/// Single-tier adapter for IEA renewable-generation observations.
pub struct IeaRenewableAdapter {
    client: Option<IeaClient>,
}

impl IeaRenewableAdapter {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let client = config.iea_api_key.as_deref().and_then(|key| {
            IeaClient::new(key, config.request_timeout_secs, &config.user_agent).ok()
        });
        Self { client }
    }

    /// Test seam: wraps an already-constructed client.
    #[must_use]
    pub fn with_client(client: IeaClient) -> Self {
        Self {
            client: Some(client),
        }
    }
}

impl SourceAdapter<IndicatorPoint> for IeaRenewableAdapter {
    fn name(&self) -> &'static str {
        "iea_renewable_generation"
    }

    fn fetch<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, SourceResult<IndicatorPoint>> {
        Box::pin(async move {
            let Some(client) = &self.client else {
                return SourceResult::NoData(NoData::MissingCredential);
            };
            let country = query.param("country").unwrap_or_default();
            let year = parse_year(query);

            match client.renewable_generation(country, year).await {
                Ok(points) => SourceResult::from_records(points),
                Err(e) => {
                    tracing::warn!(tier = "iea_renewable_generation", error = %e, "IEA fetch failed");
                    SourceResult::NoData(no_data_kind(&e))
                }
            }
        })
    }
}

/// Fallback trade tier: UN Comtrade bilateral records.
pub struct ComtradeTradeAdapter {
    client: Option<ComtradeClient>,
}

impl ComtradeTradeAdapter {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let client = ComtradeClient::new(config.request_timeout_secs, &config.user_agent).ok();
        Self { client }
    }

    /// Test seam: wraps an already-constructed client.
    #[must_use]
    pub fn with_client(client: ComtradeClient) -> Self {
        Self {
            client: Some(client),
        }
    }
}

impl SourceAdapter<TradeRecord> for ComtradeTradeAdapter {
    fn name(&self) -> &'static str {
        "comtrade_electricity_trade"
    }

    fn fetch<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, SourceResult<TradeRecord>> {
        Box::pin(async move {
            let Some(client) = &self.client else {
                return SourceResult::NoData(NoData::Transport);
            };
            let reporter = query.param("country").unwrap_or_default();
            let partner = query.param("partner").unwrap_or(reporter);
            let year = parse_year(query);

            match client.electricity_trade(reporter, partner, year).await {
                Ok(records) => SourceResult::from_records(records),
                Err(e) => {
                    tracing::warn!(tier = "comtrade_electricity_trade", error = %e, "Comtrade fetch failed");
                    SourceResult::NoData(no_data_kind(&e))
                }
            }
        })
    }
}

fn parse_year(query: &Query) -> i32 {
    query
        .param("year")
        .and_then(|s| s.parse().ok())
        .unwrap_or(2023)
}
