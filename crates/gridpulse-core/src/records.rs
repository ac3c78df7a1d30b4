//! Normalized record shapes.
//!
//! Every source adapter, whatever its native wire format, produces one of
//! these flat structures. Records have no cross-record relationships; time
//! series are ordered ascending by timestamp, news descending.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One point of a time series (generation, load, flow, carbon intensity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    /// Unit label, e.g. `"MW"` or `"gCO2eq/kWh"`.
    pub unit: String,
}

/// One news article, already categorized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub source: String,
    pub published: DateTime<Utc>,
    pub category: String,
}

/// Latest carbon-intensity reading for a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarbonIntensity {
    pub zone: String,
    /// gCO2eq/kWh.
    pub carbon_intensity: f64,
    pub datetime: DateTime<Utc>,
}

/// Share of one production source in a zone's current electricity mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixShare {
    pub source: String,
    /// Percentage of total generation, `0.0..=100.0`.
    pub share_pct: f64,
}

/// One annual observation of a development indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub year: i32,
    pub value: f64,
}

/// One annual trade observation (imports or exports of electricity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub country: String,
    pub year: i32,
    /// `"import"` or `"export"`.
    pub flow: String,
    pub value_usd: f64,
}

/// Current energy commodity price snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommodityPrices {
    pub brent_usd_bbl: f64,
    pub wti_usd_bbl: f64,
    pub natural_gas_usd_mmbtu: f64,
    pub coal_usd_per_ton: f64,
    pub as_of: NaiveDate,
}

/// One cross-border transmission link from the interconnection catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interconnection {
    pub from: String,
    pub to: String,
    pub capacity_mw: u32,
    pub voltage_kv: u32,
    /// `"HVAC"` or `"HVDC"`.
    pub kind: String,
    /// `"operating"`, `"construction"`, or `"planned"`.
    pub status: String,
    pub region: String,
    pub commissioned_year: u16,
    pub from_coords: (f64, f64),
    pub to_coords: (f64, f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn time_series_point_serializes_with_unit() {
        let point = TimeSeriesPoint {
            timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            value: 412.5,
            unit: "MW".to_string(),
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["unit"], "MW");
        assert_eq!(json["value"], 412.5);
    }

    #[test]
    fn interconnection_round_trips_through_json() {
        let link = Interconnection {
            from: "India".to_string(),
            to: "Bangladesh".to_string(),
            capacity_mw: 2000,
            voltage_kv: 400,
            kind: "HVDC".to_string(),
            status: "operating".to_string(),
            region: "SAARC".to_string(),
            commissioned_year: 2013,
            from_coords: (20.59, 78.96),
            to_coords: (23.69, 90.36),
        };
        let json = serde_json::to_string(&link).unwrap();
        let back: Interconnection = serde_json::from_str(&json).unwrap();
        assert_eq!(back, link);
    }
}
