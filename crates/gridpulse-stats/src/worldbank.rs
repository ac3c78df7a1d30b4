//! World Bank indicator API client.
//!
//! Unauthenticated JSON REST; responses are a two-element array of
//! `[metadata, rows]`. Every series passes through
//! [`normalize_indicator_rows`] before reaching callers.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use gridpulse_core::records::IndicatorPoint;

use crate::error::StatsError;

const DEFAULT_BASE_URL: &str = "https://api.worldbank.org/v2/";

/// Access to electricity (% of population).
pub const INDICATOR_ELECTRICITY_ACCESS: &str = "EG.ELC.ACCS.ZS";
/// Electric power consumption (kWh per capita).
pub const INDICATOR_ELECTRICITY_CONSUMPTION: &str = "EG.USE.ELEC.KH.PC";

const PER_PAGE: &str = "500";

/// Client for the World Bank indicator API. No credential required.
pub struct WorldBankClient {
    client: Client,
    base_url: Url,
}

impl WorldBankClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, StatsError> {
        Self::with_base_url(timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`StatsError::Config`] if `base_url` is
    /// not a valid URL.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, StatsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| StatsError::Config(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Fetches one indicator series for a country (ISO-3 code), normalized
    /// and sorted ascending by year.
    ///
    /// # Errors
    ///
    /// - [`StatsError::Http`] on transport failure or non-2xx status.
    /// - [`StatsError::Deserialize`] if the body is not valid JSON.
    /// - [`StatsError::UnexpectedShape`] if the body is not the documented
    ///   two-element `[metadata, rows]` array.
    pub async fn indicator(
        &self,
        country_code: &str,
        indicator: &str,
    ) -> Result<Vec<IndicatorPoint>, StatsError> {
        let path = format!("country/{country_code}/indicator/{indicator}");
        let mut url = self
            .base_url
            .join(&path)
            .map_err(|e| StatsError::Config(format!("invalid indicator path '{path}': {e}")))?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("per_page", PER_PAGE);

        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body).map_err(|e| StatsError::Deserialize {
            context: url.to_string(),
            source: e,
        })?;

        let rows = value
            .as_array()
            .filter(|arr| arr.len() >= 2)
            .and_then(|arr| arr[1].as_array())
            .ok_or_else(|| StatsError::UnexpectedShape {
                context: url.to_string(),
            })?;

        Ok(normalize_indicator_rows(rows))
    }

    /// Access-to-electricity series (% of population).
    ///
    /// # Errors
    ///
    /// See [`WorldBankClient::indicator`].
    pub async fn electricity_access(
        &self,
        country_code: &str,
    ) -> Result<Vec<IndicatorPoint>, StatsError> {
        self.indicator(country_code, INDICATOR_ELECTRICITY_ACCESS)
            .await
    }

    /// Per-capita electricity consumption series (kWh).
    ///
    /// # Errors
    ///
    /// See [`WorldBankClient::indicator`].
    pub async fn electricity_consumption(
        &self,
        country_code: &str,
    ) -> Result<Vec<IndicatorPoint>, StatsError> {
        self.indicator(country_code, INDICATOR_ELECTRICITY_CONSUMPTION)
            .await
    }
}

/// Normalizes raw indicator rows into `{year, value}` points.
///
/// Rows with a null or missing value are dropped. Years and values are
/// coerced from either JSON numbers or numeric strings; rows that fail
/// coercion are skipped, never an error. Output is sorted ascending by year.
#[must_use]
pub fn normalize_indicator_rows(rows: &[Value]) -> Vec<IndicatorPoint> {
    let mut points: Vec<IndicatorPoint> = rows
        .iter()
        .filter_map(|row| {
            let value = coerce_f64(row.get("value")?)?;
            let year = coerce_i32(row.get("date")?)?;
            Some(IndicatorPoint { year, value })
        })
        .collect();
    points.sort_by_key(|p| p.year);
    points
}

fn coerce_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_i32(v: &Value) -> Option<i32> {
    match v {
        Value::Number(n) => i32::try_from(n.as_i64()?).ok(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
