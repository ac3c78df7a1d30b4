//! Query types passed from the presentation layer into adapter chains.

use std::collections::BTreeMap;

/// Data category served by one adapter chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    GenerationForecast,
    LoadForecast,
    CrossBorderFlows,
    CarbonIntensity,
    ElectricityMix,
    Indicator,
    ElectricityTrade,
    News,
    CommodityPrices,
    Interconnections,
}

impl Category {
    /// Stable label used in logs and CLI output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::GenerationForecast => "generation_forecast",
            Category::LoadForecast => "load_forecast",
            Category::CrossBorderFlows => "cross_border_flows",
            Category::CarbonIntensity => "carbon_intensity",
            Category::ElectricityMix => "electricity_mix",
            Category::Indicator => "indicator",
            Category::ElectricityTrade => "electricity_trade",
            Category::News => "news",
            Category::CommodityPrices => "commodity_prices",
            Category::Interconnections => "interconnections",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One request for a category of data: the category tag plus a flat map of
/// provider parameters (zone code, period bounds, page size, ...).
///
/// Immutable once built — adapters only read from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    category: Category,
    params: BTreeMap<String, String>,
}

impl Query {
    #[must_use]
    pub fn new(category: Category) -> Self {
        Self {
            category,
            params: BTreeMap::new(),
        }
    }

    /// Adds one parameter, consuming and returning the query for chaining.
    #[must_use]
    pub fn with_param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}
