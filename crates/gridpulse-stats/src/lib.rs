//! Statistics and trade data clients.
//!
//! Three providers: the public World Bank indicator API (with the row
//! normalizer every indicator series passes through), the key-authenticated
//! IEA data API, and the public UN Comtrade API used as the trade fallback
//! tier when no IEA key is configured or the IEA call fails.

pub mod adapter;
pub mod comtrade;
pub mod error;
pub mod iea;
pub mod worldbank;

pub use adapter::{ComtradeTradeAdapter, IeaRenewableAdapter, IeaTradeAdapter, WorldBankAdapter};
pub use comtrade::ComtradeClient;
pub use error::StatsError;
pub use iea::IeaClient;
pub use worldbank::{normalize_indicator_rows, WorldBankClient};
