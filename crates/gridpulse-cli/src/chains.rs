//! Chain assembly: fixed tier order per category.
//!
//! Every command resolves through an [`AdapterChain`]; the tier order here
//! is the single place it is defined. Chains whose last live tier can fail
//! without a built-in dataset simply resolve to nothing.

use gridpulse_core::records::{
    CarbonIntensity, CommodityPrices, IndicatorPoint, Interconnection, MixShare, NewsArticle,
    TimeSeriesPoint, TradeRecord,
};
use gridpulse_core::{AdapterChain, AppConfig, Category};
use gridpulse_emaps::{CarbonHistoryAdapter, LatestCarbonAdapter, PowerBreakdownAdapter};
use gridpulse_entsoe::{EntsoeAdapter, EntsoeOp};
use gridpulse_markets::{
    sample_prices, CommodityAdapter, InterconnectionCatalogAdapter,
};
use gridpulse_news::{fallback_articles, FeedScrapeAdapter, NewsApiAdapter};
use gridpulse_stats::{
    ComtradeTradeAdapter, IeaRenewableAdapter, IeaTradeAdapter, WorldBankAdapter,
};

pub fn generation_chain(config: &AppConfig) -> AdapterChain<TimeSeriesPoint> {
    AdapterChain::new(Category::GenerationForecast).tier(Box::new(EntsoeAdapter::from_config(
        config,
        EntsoeOp::GenerationForecast,
    )))
}

pub fn load_chain(config: &AppConfig) -> AdapterChain<TimeSeriesPoint> {
    AdapterChain::new(Category::LoadForecast).tier(Box::new(EntsoeAdapter::from_config(
        config,
        EntsoeOp::LoadForecast,
    )))
}

pub fn flows_chain(config: &AppConfig) -> AdapterChain<TimeSeriesPoint> {
    AdapterChain::new(Category::CrossBorderFlows).tier(Box::new(EntsoeAdapter::from_config(
        config,
        EntsoeOp::CrossBorderFlows,
    )))
}

pub fn carbon_latest_chain(config: &AppConfig) -> AdapterChain<CarbonIntensity> {
    AdapterChain::new(Category::CarbonIntensity)
        .tier(Box::new(LatestCarbonAdapter::from_config(config)))
}

pub fn carbon_history_chain(config: &AppConfig) -> AdapterChain<TimeSeriesPoint> {
    AdapterChain::new(Category::CarbonIntensity)
        .tier(Box::new(CarbonHistoryAdapter::from_config(config)))
}

pub fn mix_chain(config: &AppConfig) -> AdapterChain<MixShare> {
    AdapterChain::new(Category::ElectricityMix)
        .tier(Box::new(PowerBreakdownAdapter::from_config(config)))
}

pub fn indicator_chain(config: &AppConfig) -> AdapterChain<IndicatorPoint> {
    AdapterChain::new(Category::Indicator).tier(Box::new(WorldBankAdapter::from_config(config)))
}

pub fn renewables_chain(config: &AppConfig) -> AdapterChain<IndicatorPoint> {
    AdapterChain::new(Category::Indicator).tier(Box::new(IeaRenewableAdapter::from_config(config)))
}

/// IEA first, UN Comtrade second; both down resolves empty.
pub fn trade_chain(config: &AppConfig) -> AdapterChain<TradeRecord> {
    AdapterChain::new(Category::ElectricityTrade)
        .tier(Box::new(IeaTradeAdapter::from_config(config)))
        .tier(Box::new(ComtradeTradeAdapter::from_config(config)))
}

/// NewsAPI first, feed-plus-scrape second, archive articles as the floor.
pub fn news_chain(config: &AppConfig) -> AdapterChain<NewsArticle> {
    AdapterChain::new(Category::News)
        .tier(Box::new(NewsApiAdapter::from_config(config)))
        .tier(Box::new(FeedScrapeAdapter::from_config(config)))
        .sample(fallback_articles())
}

pub fn prices_chain(config: &AppConfig) -> AdapterChain<CommodityPrices> {
    AdapterChain::new(Category::CommodityPrices)
        .tier(Box::new(CommodityAdapter::from_config(config)))
        .sample(vec![sample_prices()])
}

pub fn interconnections_chain() -> AdapterChain<Interconnection> {
    AdapterChain::new(Category::Interconnections).tier(Box::new(InterconnectionCatalogAdapter))
}
