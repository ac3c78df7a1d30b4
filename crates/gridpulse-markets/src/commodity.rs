//! Energy commodity prices: best-effort live fetch with a fixed fallback.
//!
//! There is no stable free endpoint for these quotes, so the live tier is a
//! configurable JSON endpoint and callers are expected to end the chain on
//! [`sample_prices`].

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::{Client, Url};

use gridpulse_core::records::CommodityPrices;

use crate::error::MarketsError;

/// Fixed fallback quotes. `as_of` is a constant so repeated fallback reads
/// are identical.
#[must_use]
pub fn sample_prices() -> CommodityPrices {
    CommodityPrices {
        brent_usd_bbl: 82.45,
        wti_usd_bbl: 78.90,
        natural_gas_usd_mmbtu: 3.45,
        coal_usd_per_ton: 95.50,
        as_of: NaiveDate::from_ymd_opt(2024, 11, 18).unwrap_or_default(),
    }
}

/// Client for a JSON commodity-quote endpoint.
pub struct CommodityClient {
    client: Client,
    endpoint: Url,
}

impl CommodityClient {
    /// Creates a client for the given quote endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`MarketsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`MarketsError::Config`] if `endpoint` is
    /// not a valid URL.
    pub fn new(endpoint: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, MarketsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let endpoint = Url::parse(endpoint)
            .map_err(|e| MarketsError::Config(format!("invalid endpoint '{endpoint}': {e}")))?;

        Ok(Self { client, endpoint })
    }

    /// Fetches the current quote set.
    ///
    /// # Errors
    ///
    /// [`MarketsError::Http`] on transport failure or non-2xx status,
    /// [`MarketsError::Deserialize`] on an unexpected body shape.
    pub async fn latest_prices(&self) -> Result<CommodityPrices, MarketsError> {
        let response = self.client.get(self.endpoint.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| MarketsError::Deserialize {
            context: self.endpoint.to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_prices_are_deterministic() {
        assert_eq!(sample_prices(), sample_prices());
        assert_eq!(sample_prices().as_of.to_string(), "2024-11-18");
    }
}
