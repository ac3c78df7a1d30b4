//! UN Comtrade API client.
//!
//! Public (unauthenticated) bilateral trade data. Electricity is HS
//! commodity code 2716; `rg=12` requests both imports and exports.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use gridpulse_core::records::TradeRecord;

use crate::error::StatsError;

const DEFAULT_BASE_URL: &str = "https://comtrade.un.org/api/get";

const HS_ELECTRICITY: &str = "2716";

#[derive(Debug, Deserialize)]
struct ComtradeResponse {
    #[serde(default)]
    dataset: Vec<ComtradeRow>,
}

#[derive(Debug, Deserialize)]
struct ComtradeRow {
    #[serde(rename = "rtTitle")]
    reporter: String,
    #[serde(rename = "yr")]
    year: i32,
    #[serde(rename = "rgDesc")]
    flow: String,
    #[serde(rename = "TradeValue")]
    trade_value: f64,
}

/// Client for UN Comtrade bilateral electricity trade.
pub struct ComtradeClient {
    client: Client,
    base_url: Url,
}

impl ComtradeClient {
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

        let base_url = Url::parse(base_url)
            .map_err(|e| StatsError::Config(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Bilateral electricity trade (HS 2716, imports and exports) between a
    /// reporter and a partner for one year.
    ///
    /// # Errors
    ///
    /// [`StatsError::Http`] on transport failure or non-2xx status,
    /// [`StatsError::Deserialize`] on an unexpected body shape.
    pub async fn electricity_trade(
        &self,
        reporter: &str,
        partner: &str,
        year: i32,
    ) -> Result<Vec<TradeRecord>, StatsError> {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("max", "50000");
            pairs.append_pair("type", "C");
            pairs.append_pair("freq", "A");
            pairs.append_pair("px", "HS");
            pairs.append_pair("ps", &year.to_string());
            pairs.append_pair("r", reporter);
            pairs.append_pair("p", partner);
            pairs.append_pair("rg", "12");
            pairs.append_pair("cc", HS_ELECTRICITY);
        }

        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        let parsed: ComtradeResponse =
            serde_json::from_str(&body).map_err(|e| StatsError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;

        Ok(parsed
            .dataset
            .into_iter()
            .map(|row| TradeRecord {
                country: row.reporter,
                year: row.year,
                flow: row.flow.to_lowercase(),
                value_usd: row.trade_value,
            })
            .collect())
    }
}
