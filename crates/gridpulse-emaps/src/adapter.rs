//! Cascade adapters for the carbon-intensity and mix categories.

use futures::future::BoxFuture;

use gridpulse_core::cascade::{NoData, SourceAdapter, SourceResult};
use gridpulse_core::records::{CarbonIntensity, MixShare, TimeSeriesPoint};
use gridpulse_core::{AppConfig, Query};

use crate::client::EmapsClient;
use crate::error::EmapsError;

fn client_from_config(config: &AppConfig) -> Option<EmapsClient> {
    config.emaps_token.as_deref().and_then(|token| {
        EmapsClient::new(token, config.request_timeout_secs, &config.user_agent).ok()
    })
}

/// Primary-tier adapter producing carbon-intensity time series.
pub struct CarbonHistoryAdapter {
    client: Option<EmapsClient>,
}

impl CarbonHistoryAdapter {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            client: client_from_config(config),
        }
    }

    /// Test seam: wraps an already-constructed client.
    #[must_use]
    pub fn with_client(client: EmapsClient) -> Self {
        Self {
            client: Some(client),
        }
    }
}

impl SourceAdapter<TimeSeriesPoint> for CarbonHistoryAdapter {
    fn name(&self) -> &'static str {
        "emaps_carbon_history"
    }

    fn fetch<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, SourceResult<TimeSeriesPoint>> {
        Box::pin(async move {
            let Some(client) = &self.client else {
                return SourceResult::NoData(NoData::MissingCredential);
            };
            let zone = query.param("zone").unwrap_or_default();
            let start = query.param("start").unwrap_or_default();
            let end = query.param("end").unwrap_or_default();

            match client.carbon_intensity_history(zone, start, end).await {
                Ok(points) => SourceResult::from_records(points),
                Err(e) => {
                    tracing::warn!(tier = "emaps_carbon_history", error = %e, "Electricity Maps fetch failed");
                    SourceResult::NoData(no_data_kind(&e))
                }
            }
        })
    }
}

/// Adapter producing the single latest carbon-intensity reading for a zone.
pub struct LatestCarbonAdapter {
    client: Option<EmapsClient>,
}

impl LatestCarbonAdapter {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            client: client_from_config(config),
        }
    }

    /// Test seam: wraps an already-constructed client.
    #[must_use]
    pub fn with_client(client: EmapsClient) -> Self {
        Self {
            client: Some(client),
        }
    }
}

impl SourceAdapter<CarbonIntensity> for LatestCarbonAdapter {
    fn name(&self) -> &'static str {
        "emaps_carbon_latest"
    }

    fn fetch<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, SourceResult<CarbonIntensity>> {
        Box::pin(async move {
            let Some(client) = &self.client else {
                return SourceResult::NoData(NoData::MissingCredential);
            };
            let zone = query.param("zone").unwrap_or_default();
            match client.latest_carbon_intensity(zone).await {
                Ok(reading) => SourceResult::from_records(vec![reading]),
                Err(e) => {
                    tracing::warn!(tier = "emaps_carbon_latest", error = %e, "Electricity Maps fetch failed");
                    SourceResult::NoData(no_data_kind(&e))
                }
            }
        })
    }
}

/// Adapter producing the current production mix as percentage shares.
pub struct PowerBreakdownAdapter {
    client: Option<EmapsClient>,
}

impl PowerBreakdownAdapter {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            client: client_from_config(config),
        }
    }

    /// Test seam: wraps an already-constructed client.
    #[must_use]
    pub fn with_client(client: EmapsClient) -> Self {
        Self {
            client: Some(client),
        }
    }
}

impl SourceAdapter<MixShare> for PowerBreakdownAdapter {
    fn name(&self) -> &'static str {
        "emaps_power_breakdown"
    }

    fn fetch<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, SourceResult<MixShare>> {
        Box::pin(async move {
            let Some(client) = &self.client else {
                return SourceResult::NoData(NoData::MissingCredential);
            };
            let zone = query.param("zone").unwrap_or_default();
            match client.power_breakdown(zone).await {
                Ok(breakdown) => SourceResult::from_records(breakdown.mix),
                Err(e) => {
                    tracing::warn!(tier = "emaps_power_breakdown", error = %e, "Electricity Maps fetch failed");
                    SourceResult::NoData(no_data_kind(&e))
                }
            }
        })
    }
}

fn no_data_kind(err: &EmapsError) -> NoData {
    match err {
        EmapsError::Http(e) if e.status().is_some() => NoData::Status,
        EmapsError::Http(_) | EmapsError::Config(_) => NoData::Transport,
        EmapsError::Deserialize { .. } => NoData::Malformed,
    }
}

#[cfg(test)]
mod tests {
    use gridpulse_core::Category;

    use super::*;

    #[tokio::test]
    async fn missing_token_reports_missing_credential() {
        let adapter = CarbonHistoryAdapter { client: None };
        let query = Query::new(Category::CarbonIntensity).with_param("zone", "DE");
        let result = adapter.fetch(&query).await;
        assert_eq!(result, SourceResult::NoData(NoData::MissingCredential));
    }
}
