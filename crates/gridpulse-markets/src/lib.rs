//! Market-adjacent data: energy commodity quotes and the static catalog of
//! major cross-border transmission links.

pub mod adapter;
pub mod commodity;
pub mod error;
pub mod interconnections;

pub use adapter::{CommodityAdapter, InterconnectionCatalogAdapter};
pub use commodity::{sample_prices, CommodityClient};
pub use error::MarketsError;
pub use interconnections::{global_interconnections, interconnections_in_region};
