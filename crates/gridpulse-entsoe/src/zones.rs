//! Country-name to EIC bidding-zone code mapping for the European grid.

/// EIC area codes for the countries the dashboard exposes.
const AREA_CODES: &[(&str, &str)] = &[
    ("Germany", "10YDE-VE-------2"),
    ("France", "10YFR-RTE------C"),
    ("Spain", "10YES-REE------0"),
    ("Italy", "10YIT-GRTN-----B"),
    ("Netherlands", "10YNL----------L"),
    ("Belgium", "10YBE----------2"),
    ("Poland", "10YPL-AREA-----S"),
];

/// Looks up the EIC area code for a country name. Case-sensitive; returns
/// `None` for countries outside the configured set.
#[must_use]
pub fn area_code(country: &str) -> Option<&'static str> {
    AREA_CODES
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, code)| *code)
}
