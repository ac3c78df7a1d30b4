//! HTTP client for the ENTSO-E Transparency Platform query API.
//!
//! Wraps `reqwest` with security-token management and XML market-document
//! parsing. Periods use the platform's compact `YYYYMMDDHHmm` format.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::{Client, Url};

use gridpulse_core::records::TimeSeriesPoint;

use crate::error::EntsoeError;
use crate::parse::parse_market_document;

const DEFAULT_BASE_URL: &str = "https://web-api.tp.entsoe.eu/api";

/// Document type codes for the operations the dashboard needs.
const DOC_GENERATION_FORECAST: &str = "A71";
const DOC_LOAD_FORECAST: &str = "A65";
const DOC_PHYSICAL_FLOWS: &str = "A11";

/// Client for the ENTSO-E Transparency Platform.
///
/// Use [`EntsoeClient::new`] for production or
/// [`EntsoeClient::with_base_url`] to point at a mock server in tests.
pub struct EntsoeClient {
    client: Client,
    token: String,
    base_url: Url,
}

impl EntsoeClient {
    /// Creates a new client pointed at the production query endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`EntsoeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(token: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, EntsoeError> {
        Self::with_base_url(token, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`EntsoeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`EntsoeError::Config`] if `base_url` is
    /// not a valid URL.
    pub fn with_base_url(
        token: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, EntsoeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url)
            .map_err(|e| EntsoeError::Config(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            token: token.to_owned(),
            base_url,
        })
    }

    /// Generation forecast by production type (document A71) for an area.
    ///
    /// # Errors
    ///
    /// [`EntsoeError::Http`] on transport failure or non-2xx status,
    /// [`EntsoeError::Xml`] on a malformed document.
    pub async fn generation_forecast(
        &self,
        area: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<TimeSeriesPoint>, EntsoeError> {
        let url = self.build_url(&[
            ("documentType", DOC_GENERATION_FORECAST),
            ("in_Domain", area),
            ("periodStart", &compact_period(start)),
            ("periodEnd", &compact_period(end)),
        ]);
        self.request_points(&url).await
    }

    /// Total load forecast (document A65) for an area.
    ///
    /// # Errors
    ///
    /// [`EntsoeError::Http`] on transport failure or non-2xx status,
    /// [`EntsoeError::Xml`] on a malformed document.
    pub async fn load_forecast(
        &self,
        area: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<TimeSeriesPoint>, EntsoeError> {
        let url = self.build_url(&[
            ("documentType", DOC_LOAD_FORECAST),
            ("outBiddingZone_Domain", area),
            ("periodStart", &compact_period(start)),
            ("periodEnd", &compact_period(end)),
        ]);
        self.request_points(&url).await
    }

    /// Cross-border physical flows (document A11) between two areas.
    ///
    /// # Errors
    ///
    /// [`EntsoeError::Http`] on transport failure or non-2xx status,
    /// [`EntsoeError::Xml`] on a malformed document.
    pub async fn cross_border_flows(
        &self,
        from_area: &str,
        to_area: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<TimeSeriesPoint>, EntsoeError> {
        let url = self.build_url(&[
            ("documentType", DOC_PHYSICAL_FLOWS),
            ("in_Domain", from_area),
            ("out_Domain", to_area),
            ("periodStart", &compact_period(start)),
            ("periodEnd", &compact_period(end)),
        ]);
        self.request_points(&url).await
    }

    /// Builds the query URL with the security token and percent-encoded
    /// parameters via [`Url::query_pairs_mut`].
    fn build_url(&self, extra: &[(&str, &str)]) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("securityToken", &self.token);
            for (k, v) in extra {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request, asserts a 2xx status, and parses the XML body.
    async fn request_points(&self, url: &Url) -> Result<Vec<TimeSeriesPoint>, EntsoeError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        parse_market_document(&body, "MW")
    }
}

/// Formats a timestamp in the platform's compact `YYYYMMDDHHmm` form.
fn compact_period(ts: DateTime<Utc>) -> String {
    ts.format("%Y%m%d%H%M").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn test_client(base_url: &str) -> EntsoeClient {
        EntsoeClient::with_base_url("test-token", 30, "gridpulse-test/0.1", base_url)
            .expect("client construction should not fail")
    }

    #[test]
    fn compact_period_format() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        assert_eq!(compact_period(ts), "202406010930");
    }

    #[test]
    fn build_url_includes_security_token_and_params() {
        let client = test_client("https://web-api.tp.entsoe.eu/api");
        let url = client.build_url(&[("documentType", "A71"), ("in_Domain", "10YDE-VE-------2")]);
        assert_eq!(
            url.as_str(),
            "https://web-api.tp.entsoe.eu/api?securityToken=test-token&documentType=A71&in_Domain=10YDE-VE-------2"
        );
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        let result = EntsoeClient::with_base_url("t", 30, "ua", "not a url");
        assert!(matches!(result, Err(EntsoeError::Config(_))));
    }
}
