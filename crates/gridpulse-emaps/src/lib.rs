//! Electricity Maps v3 API client.
//!
//! Token-authenticated JSON REST endpoints for carbon intensity (`latest`
//! and `history`) and the current power-production breakdown per zone.

pub mod adapter;
pub mod client;
pub mod error;
pub mod zones;

pub use adapter::{CarbonHistoryAdapter, LatestCarbonAdapter, PowerBreakdownAdapter};
pub use client::{EmapsClient, PowerBreakdown};
pub use error::EmapsError;
pub use zones::zone_code;
