//! HTTP client for the Electricity Maps v3 REST API.
//!
//! All endpoints authenticate via the `auth-token` header and take the zone
//! as a short code query parameter.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::{Client, Url};
use serde::Deserialize;

use gridpulse_core::records::{CarbonIntensity, MixShare, TimeSeriesPoint};

use crate::error::EmapsError;

const DEFAULT_BASE_URL: &str = "https://api.electricitymaps.com/v3/";

const CARBON_INTENSITY_UNIT: &str = "gCO2eq/kWh";

/// Current production mix for a zone, with per-source shares normalized to
/// percentages of total generation.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerBreakdown {
    pub zone: String,
    pub renewable_percentage: Option<f64>,
    pub fossil_free_percentage: Option<f64>,
    /// Shares ordered descending, zero-output sources dropped.
    pub mix: Vec<MixShare>,
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    zone: String,
    #[serde(rename = "carbonIntensity")]
    carbon_intensity: f64,
    datetime: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct HistoryResponse {
    history: Vec<HistoryEntry>,
}

#[derive(Debug, Deserialize)]
struct HistoryEntry {
    #[serde(rename = "carbonIntensity")]
    carbon_intensity: f64,
    datetime: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct BreakdownResponse {
    zone: String,
    #[serde(rename = "renewablePercentage")]
    renewable_percentage: Option<f64>,
    #[serde(rename = "fossilFreePercentage")]
    fossil_free_percentage: Option<f64>,
    #[serde(rename = "powerProductionBreakdown", default)]
    power_production_breakdown: BTreeMap<String, Option<f64>>,
}

/// Client for the Electricity Maps v3 API.
pub struct EmapsClient {
    client: Client,
    token: String,
    base_url: Url,
}

impl EmapsClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`EmapsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(token: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, EmapsError> {
        Self::with_base_url(token, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`EmapsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`EmapsError::Config`] if `base_url` is
    /// not a valid URL.
    pub fn with_base_url(
        token: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, EmapsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| EmapsError::Config(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            token: token.to_owned(),
            base_url,
        })
    }

    /// Latest carbon-intensity reading for a zone.
    ///
    /// # Errors
    ///
    /// [`EmapsError::Http`] on transport failure or non-2xx status,
    /// [`EmapsError::Deserialize`] on an unexpected body shape.
    pub async fn latest_carbon_intensity(&self, zone: &str) -> Result<CarbonIntensity, EmapsError> {
        let latest: LatestResponse = self
            .request("carbon-intensity/latest", &[("zone", zone)])
            .await?;
        Ok(CarbonIntensity {
            zone: latest.zone,
            carbon_intensity: latest.carbon_intensity,
            datetime: latest.datetime,
        })
    }

    /// Carbon-intensity history for a zone, ordered ascending by datetime.
    ///
    /// # Errors
    ///
    /// [`EmapsError::Http`] on transport failure or non-2xx status,
    /// [`EmapsError::Deserialize`] on an unexpected body shape.
    pub async fn carbon_intensity_history(
        &self,
        zone: &str,
        start: &str,
        end: &str,
    ) -> Result<Vec<TimeSeriesPoint>, EmapsError> {
        let history: HistoryResponse = self
            .request(
                "carbon-intensity/history",
                &[("zone", zone), ("start", start), ("end", end)],
            )
            .await?;

        let mut points: Vec<TimeSeriesPoint> = history
            .history
            .into_iter()
            .map(|entry| TimeSeriesPoint {
                timestamp: entry.datetime,
                value: entry.carbon_intensity,
                unit: CARBON_INTENSITY_UNIT.to_string(),
            })
            .collect();
        points.sort_by_key(|p| p.timestamp);
        Ok(points)
    }

    /// Current power-production breakdown for a zone, normalized to
    /// percentage shares of total generation.
    ///
    /// # Errors
    ///
    /// [`EmapsError::Http`] on transport failure or non-2xx status,
    /// [`EmapsError::Deserialize`] on an unexpected body shape.
    pub async fn power_breakdown(&self, zone: &str) -> Result<PowerBreakdown, EmapsError> {
        let raw: BreakdownResponse = self
            .request("power-breakdown/latest", &[("zone", zone)])
            .await?;

        Ok(PowerBreakdown {
            zone: raw.zone,
            renewable_percentage: raw.renewable_percentage,
            fossil_free_percentage: raw.fossil_free_percentage,
            mix: normalize_mix(&raw.power_production_breakdown),
        })
    }

    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, EmapsError> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| EmapsError::Config(format!("invalid endpoint path '{path}': {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }

        let response = self
            .client
            .get(url.clone())
            .header("auth-token", &self.token)
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| EmapsError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

/// Converts absolute per-source production values into percentage shares.
///
/// Null and non-positive entries are dropped; shares are ordered descending.
/// An all-null breakdown yields an empty mix.
fn normalize_mix(breakdown: &BTreeMap<String, Option<f64>>) -> Vec<MixShare> {
    let total: f64 = breakdown.values().flatten().filter(|v| **v > 0.0).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut mix: Vec<MixShare> = breakdown
        .iter()
        .filter_map(|(source, value)| {
            let value = (*value)?;
            if value <= 0.0 {
                return None;
            }
            Some(MixShare {
                source: source.clone(),
                share_pct: value / total * 100.0,
            })
        })
        .collect();
    mix.sort_by(|a, b| b.share_pct.total_cmp(&a.share_pct));
    mix
}
