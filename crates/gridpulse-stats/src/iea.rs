//! IEA data API client (key-authenticated).

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use gridpulse_core::records::{IndicatorPoint, TradeRecord};

use crate::error::StatsError;

const DEFAULT_BASE_URL: &str = "https://data.iea.org/api/v1/";

const TRADE_INDICATORS: &str = "ELECTRADE_EXPPRC,ELECTRADE_IMPPRC";
const RENEWABLE_INDICATOR: &str = "RENEWABLEGEN";

#[derive(Debug, Deserialize)]
struct DataResponse {
    #[serde(default)]
    data: Vec<DataRow>,
}

#[derive(Debug, Deserialize)]
struct DataRow {
    country: String,
    year: i32,
    indicator: String,
    value: f64,
}

/// Client for the IEA electricity datasets.
pub struct IeaClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl IeaClient {
    /// Creates a new client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, StatsError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`StatsError::Config`] if `base_url` is
    /// not a valid URL.
    pub fn with_base_url(
        api_key: &str,
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

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Electricity import/export price records for a country and year.
    ///
    /// # Errors
    ///
    /// [`StatsError::Http`] on transport failure or non-2xx status,
    /// [`StatsError::Deserialize`] on an unexpected body shape.
    pub async fn electricity_trade(
        &self,
        country: &str,
        year: i32,
    ) -> Result<Vec<TradeRecord>, StatsError> {
        let rows = self.data_rows(country, year, TRADE_INDICATORS).await?;
        Ok(rows
            .into_iter()
            .map(|row| {
                let flow = if row.indicator.contains("EXP") {
                    "export"
                } else {
                    "import"
                };
                TradeRecord {
                    country: row.country,
                    year: row.year,
                    flow: flow.to_string(),
                    value_usd: row.value,
                }
            })
            .collect())
    }

    /// Renewable generation observations for a country and year.
    ///
    /// # Errors
    ///
    /// [`StatsError::Http`] on transport failure or non-2xx status,
    /// [`StatsError::Deserialize`] on an unexpected body shape.
    pub async fn renewable_generation(
        &self,
        country: &str,
        year: i32,
    ) -> Result<Vec<IndicatorPoint>, StatsError> {
        let rows = self.data_rows(country, year, RENEWABLE_INDICATOR).await?;
        Ok(rows
            .into_iter()
            .map(|row| IndicatorPoint {
                year: row.year,
                value: row.value,
            })
            .collect())
    }

    async fn data_rows(
        &self,
        country: &str,
        year: i32,
        indicators: &str,
    ) -> Result<Vec<DataRow>, StatsError> {
        let mut url = self
            .base_url
            .join("data")
            .map_err(|e| StatsError::Config(format!("invalid endpoint path 'data': {e}")))?;
        url.query_pairs_mut()
            .append_pair("api_key", &self.api_key)
            .append_pair("countries", country)
            .append_pair("years", &year.to_string())
            .append_pair("indicators", indicators);

        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let parsed: DataResponse =
            serde_json::from_str(&body).map_err(|e| StatsError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;
        Ok(parsed.data)
    }
}
