//! Curated catalog of major cross-border transmission links.

use gridpulse_core::records::Interconnection;

struct CatalogRow {
    from: &'static str,
    to: &'static str,
    from_coords: (f64, f64),
    to_coords: (f64, f64),
    capacity_mw: u32,
    voltage_kv: u32,
    kind: &'static str,
    status: &'static str,
    region: &'static str,
    commissioned_year: u16,
}

const CATALOG: &[CatalogRow] = &[
    // SAARC
    CatalogRow {
        from: "India",
        to: "Bangladesh",
        from_coords: (20.59, 78.96),
        to_coords: (23.69, 90.36),
        capacity_mw: 2000,
        voltage_kv: 400,
        kind: "HVDC",
        status: "operating",
        region: "SAARC",
        commissioned_year: 2013,
    },
    CatalogRow {
        from: "India",
        to: "Pakistan",
        from_coords: (20.59, 78.96),
        to_coords: (30.38, 69.35),
        capacity_mw: 1500,
        voltage_kv: 500,
        kind: "HVAC",
        status: "operating",
        region: "SAARC",
        commissioned_year: 1992,
    },
    CatalogRow {
        from: "India",
        to: "Nepal",
        from_coords: (20.59, 78.96),
        to_coords: (28.39, 84.12),
        capacity_mw: 1800,
        voltage_kv: 400,
        kind: "HVDC",
        status: "operating",
        region: "SAARC",
        commissioned_year: 2016,
    },
    // East and Southeast Asia
    CatalogRow {
        from: "China",
        to: "India",
        from_coords: (35.86, 104.20),
        to_coords: (20.59, 78.96),
        capacity_mw: 3000,
        voltage_kv: 765,
        kind: "HVAC",
        status: "operating",
        region: "EAST_ASIA",
        commissioned_year: 2010,
    },
    CatalogRow {
        from: "Thailand",
        to: "Vietnam",
        from_coords: (15.87, 100.99),
        to_coords: (14.06, 108.28),
        capacity_mw: 1200,
        voltage_kv: 500,
        kind: "HVAC",
        status: "operating",
        region: "ASEAN",
        commissioned_year: 2017,
    },
    CatalogRow {
        from: "Vietnam",
        to: "Cambodia",
        from_coords: (14.06, 108.28),
        to_coords: (12.57, 104.99),
        capacity_mw: 600,
        voltage_kv: 230,
        kind: "HVAC",
        status: "operating",
        region: "ASEAN",
        commissioned_year: 2015,
    },
    CatalogRow {
        from: "Indonesia",
        to: "Malaysia",
        from_coords: (-0.79, 113.92),
        to_coords: (3.14, 101.69),
        capacity_mw: 800,
        voltage_kv: 350,
        kind: "HVDC",
        status: "operating",
        region: "ASEAN",
        commissioned_year: 2012,
    },
    // Europe
    CatalogRow {
        from: "Germany",
        to: "France",
        from_coords: (51.17, 10.45),
        to_coords: (46.23, 2.21),
        capacity_mw: 4500,
        voltage_kv: 380,
        kind: "HVAC",
        status: "operating",
        region: "ENTSO-E",
        commissioned_year: 1980,
    },
    CatalogRow {
        from: "France",
        to: "Spain",
        from_coords: (46.23, 2.21),
        to_coords: (40.46, -3.75),
        capacity_mw: 3200,
        voltage_kv: 400,
        kind: "HVAC",
        status: "operating",
        region: "ENTSO-E",
        commissioned_year: 1985,
    },
    CatalogRow {
        from: "Spain",
        to: "Portugal",
        from_coords: (40.46, -3.75),
        to_coords: (39.40, -8.22),
        capacity_mw: 2000,
        voltage_kv: 380,
        kind: "HVAC",
        status: "operating",
        region: "ENTSO-E",
        commissioned_year: 1987,
    },
    // Middle East
    CatalogRow {
        from: "Iran",
        to: "Turkey",
        from_coords: (32.43, 53.69),
        to_coords: (38.96, 35.24),
        capacity_mw: 1000,
        voltage_kv: 400,
        kind: "HVAC",
        status: "operating",
        region: "MENA",
        commissioned_year: 2000,
    },
];

/// All catalogued links, in catalog order.
#[must_use]
pub fn global_interconnections() -> Vec<Interconnection> {
    CATALOG.iter().map(to_record).collect()
}

/// Links in one region. Region codes match the catalog exactly
/// (`"SAARC"`, `"EAST_ASIA"`, `"ASEAN"`, `"ENTSO-E"`, `"MENA"`).
#[must_use]
pub fn interconnections_in_region(region: &str) -> Vec<Interconnection> {
    CATALOG
        .iter()
        .filter(|row| row.region == region)
        .map(to_record)
        .collect()
}

fn to_record(row: &CatalogRow) -> Interconnection {
    Interconnection {
        from: row.from.to_string(),
        to: row.to.to_string(),
        capacity_mw: row.capacity_mw,
        voltage_kv: row.voltage_kv,
        kind: row.kind.to_string(),
        status: row.status.to_string(),
        region: row.region.to_string(),
        commissioned_year: row.commissioned_year,
        from_coords: row.from_coords,
        to_coords: row.to_coords,
    }
}
