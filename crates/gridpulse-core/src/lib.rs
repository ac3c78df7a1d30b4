//! Shared types for the gridpulse data-acquisition workspace.
//!
//! Defines the normalized record shapes every provider crate produces, the
//! [`Query`] passed down from the presentation layer, and the tiered
//! acquisition cascade (`SourceAdapter` / `AdapterChain`) that walks a fixed
//! priority order of sources and returns the first non-empty result.

pub mod app_config;
pub mod cascade;
pub mod config;
pub mod query;
pub mod records;

use thiserror::Error;

pub use app_config::AppConfig;
pub use cascade::{AdapterChain, NoData, SourceAdapter, SourceResult};
pub use config::{load_app_config, load_app_config_from_env};
pub use query::{Category, Query};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env var: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
