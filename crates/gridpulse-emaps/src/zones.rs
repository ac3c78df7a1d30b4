//! Country-name to Electricity Maps zone code mapping.

const ZONE_CODES: &[(&str, &str)] = &[
    ("India", "IN"),
    ("China", "CN"),
    ("Germany", "DE"),
    ("France", "FR"),
    ("Spain", "ES"),
    ("Italy", "IT"),
    ("Japan", "JP"),
    ("USA", "US"),
    ("Brazil", "BR"),
    ("UK", "GB"),
    ("Canada", "CA"),
    ("Australia", "AU"),
];

/// Looks up the short zone code for a country name. Returns `None` for
/// countries outside the configured set.
#[must_use]
pub fn zone_code(country: &str) -> Option<&'static str> {
    ZONE_CODES
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, code)| *code)
}
