use std::time::Duration;

/// Application configuration, read once at startup from env vars.
///
/// All provider credentials are optional: a missing credential disables the
/// corresponding tier of its category's chain rather than being an error.
/// Credentials are held in memory only and redacted from `Debug` output.
#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub entsoe_token: Option<String>,
    pub emaps_token: Option<String>,
    pub iea_api_key: Option<String>,
    pub newsapi_key: Option<String>,
    /// Optional JSON endpoint for live commodity quotes. Not a secret.
    pub commodity_endpoint: Option<String>,
}

impl AppConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Presence report for each provider credential, for the CLI's token
    /// status command. The World Bank and UN Comtrade endpoints are public
    /// and never appear here.
    #[must_use]
    pub fn credential_status(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("entsoe", self.entsoe_token.is_some()),
            ("emaps", self.emaps_token.is_some()),
            ("iea", self.iea_api_key.is_some()),
            ("newsapi", self.newsapi_key.is_some()),
        ]
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("user_agent", &self.user_agent)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field(
                "entsoe_token",
                &self.entsoe_token.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "emaps_token",
                &self.emaps_token.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "iea_api_key",
                &self.iea_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "newsapi_key",
                &self.newsapi_key.as_ref().map(|_| "[redacted]"),
            )
            .field("commodity_endpoint", &self.commodity_endpoint)
            .finish()
    }
}
