//! Cascade adapters wrapping [`EntsoeClient`].

use chrono::{DateTime, Duration, Utc};
use futures::future::BoxFuture;

use gridpulse_core::cascade::{NoData, SourceAdapter, SourceResult};
use gridpulse_core::records::TimeSeriesPoint;
use gridpulse_core::{AppConfig, Query};

use crate::client::EntsoeClient;
use crate::error::EntsoeError;

/// Which ENTSO-E operation an adapter performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntsoeOp {
    GenerationForecast,
    LoadForecast,
    CrossBorderFlows,
}

/// Primary-tier adapter for ENTSO-E time-series categories.
///
/// Built without a client when no token is configured, in which case every
/// fetch reports [`NoData::MissingCredential`] and the chain falls through.
pub struct EntsoeAdapter {
    client: Option<EntsoeClient>,
    op: EntsoeOp,
}

impl EntsoeAdapter {
    #[must_use]
    pub fn from_config(config: &AppConfig, op: EntsoeOp) -> Self {
        let client = config.entsoe_token.as_deref().and_then(|token| {
            EntsoeClient::new(token, config.request_timeout_secs, &config.user_agent).ok()
        });
        Self { client, op }
    }

    /// Test seam: wraps an already-constructed client.
    #[must_use]
    pub fn with_client(client: EntsoeClient, op: EntsoeOp) -> Self {
        Self {
            client: Some(client),
            op,
        }
    }

    async fn fetch_points(
        client: &EntsoeClient,
        op: EntsoeOp,
        query: &Query,
    ) -> Result<Vec<TimeSeriesPoint>, EntsoeError> {
        let (start, end) = period_bounds(query);
        match op {
            EntsoeOp::GenerationForecast => {
                let area = query.param("area").unwrap_or_default();
                client.generation_forecast(area, start, end).await
            }
            EntsoeOp::LoadForecast => {
                let area = query.param("area").unwrap_or_default();
                client.load_forecast(area, start, end).await
            }
            EntsoeOp::CrossBorderFlows => {
                let from = query.param("from_area").unwrap_or_default();
                let to = query.param("to_area").unwrap_or_default();
                client.cross_border_flows(from, to, start, end).await
            }
        }
    }
}

impl SourceAdapter<TimeSeriesPoint> for EntsoeAdapter {
    fn name(&self) -> &'static str {
        match self.op {
            EntsoeOp::GenerationForecast => "entsoe_generation_forecast",
            EntsoeOp::LoadForecast => "entsoe_load_forecast",
            EntsoeOp::CrossBorderFlows => "entsoe_cross_border_flows",
        }
    }

    fn fetch<'a>(&'a self, query: &'a Query) -> BoxFuture<'a, SourceResult<TimeSeriesPoint>> {
        Box::pin(async move {
            let Some(client) = &self.client else {
                return SourceResult::NoData(NoData::MissingCredential);
            };
            match Self::fetch_points(client, self.op, query).await {
                Ok(points) => SourceResult::from_records(points),
                Err(e) => {
                    tracing::warn!(tier = self.name(), error = %e, "ENTSO-E fetch failed");
                    SourceResult::NoData(no_data_kind(&e))
                }
            }
        })
    }
}

/// Reads `start`/`end` RFC 3339 params, defaulting to the trailing 24 hours.
fn period_bounds(query: &Query) -> (DateTime<Utc>, DateTime<Utc>) {
    let parse = |key: &str| {
        query
            .param(key)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    };
    let end = parse("end").unwrap_or_else(Utc::now);
    let start = parse("start").unwrap_or_else(|| end - Duration::hours(24));
    (start, end)
}

fn no_data_kind(err: &EntsoeError) -> NoData {
    match err {
        EntsoeError::Http(e) if e.status().is_some() => NoData::Status,
        EntsoeError::Http(_) | EntsoeError::Config(_) => NoData::Transport,
        EntsoeError::Xml { .. } => NoData::Malformed,
    }
}
