//! Country-name to ISO 3166-1 alpha-3 mapping for the statistics APIs.

const ISO3_CODES: &[(&str, &str)] = &[
    ("India", "IND"),
    ("China", "CHN"),
    ("Germany", "DEU"),
    ("France", "FRA"),
    ("Spain", "ESP"),
    ("Italy", "ITA"),
    ("Netherlands", "NLD"),
    ("Belgium", "BEL"),
    ("Poland", "POL"),
    ("Japan", "JPN"),
    ("USA", "USA"),
    ("Brazil", "BRA"),
    ("UK", "GBR"),
    ("Canada", "CAN"),
    ("Australia", "AUS"),
];

/// Looks up the ISO-3 code for a country name. Returns `None` for countries
/// outside the configured set.
#[must_use]
pub fn iso3_code(country: &str) -> Option<&'static str> {
    ISO3_CODES
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, code)| *code)
}
