use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value fails to parse.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a configured value fails to parse.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing logic is decoupled from the actual environment so it can be
/// tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let log_level = or_default("GRIDPULSE_LOG_LEVEL", "info");
    let user_agent = or_default("GRIDPULSE_USER_AGENT", "gridpulse/0.1 (energy-data)");
    let request_timeout_secs = parse_u64("GRIDPULSE_REQUEST_TIMEOUT_SECS", "30")?;

    // All credentials optional; absence disables the corresponding tier.
    let entsoe_token = lookup("ENTSOE_TOKEN").ok();
    let emaps_token = lookup("EMAPS_TOKEN").ok();
    let iea_api_key = lookup("IEA_API_KEY").ok();
    let newsapi_key = lookup("NEWSAPI_KEY").ok();

    let commodity_endpoint = lookup("GRIDPULSE_COMMODITY_ENDPOINT").ok();

    Ok(AppConfig {
        log_level,
        user_agent,
        request_timeout_secs,
        entsoe_token,
        emaps_token,
        iea_api_key,
        newsapi_key,
        commodity_endpoint,
    })
}
