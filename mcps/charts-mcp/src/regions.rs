//! Fixed chart catalogs and region tables
//!
//! Chart names follow the FAA's published geonames exactly; matching is
//! case-sensitive because the upstream is.

use aviation_common::{AviationError, AviationResult};

/// Sectional aeronautical chart names
pub const SECTIONAL_CHARTS: &[&str] = &[
    "Albuquerque",
    "Anchorage",
    "Atlanta",
    "Bethel",
    "Billings",
    "Brownsville",
    "Cape Lisburne",
    "Charlotte",
    "Cheyenne",
    "Chicago",
    "Cincinnati",
    "Cold Bay",
    "Dallas-Ft Worth",
    "Dawson",
    "Denver",
    "Detroit",
    "Dutch Harbor",
    "El Paso",
    "Fairbanks",
    "Great Falls",
    "Green Bay",
    "Halifax",
    "Hawaiian Islands",
    "Houston",
    "Jacksonville",
    "Juneau",
    "Kansas City",
    "Ketchikan",
    "Klamath Falls",
    "Kodiak",
    "Lake Huron",
    "Las Vegas",
    "Los Angeles",
    "McGrath",
    "Memphis",
    "Miami",
    "Montreal",
    "New Orleans",
    "New York",
    "Nome",
    "Omaha",
    "Phoenix",
    "Point Barrow",
    "Salt Lake City",
    "San Antonio",
    "San Francisco",
    "Seattle",
    "Seward",
    "St Louis",
    "Twin Cities",
    "Washington",
    "Western Aleutian Islands",
    "Whitehorse",
    "Wichita",
];

/// Terminal Area Chart names
pub const TAC_CHARTS: &[&str] = &[
    "Anchorage-Fairbanks",
    "Atlanta",
    "Baltimore-Washington",
    "Boston",
    "Charlotte",
    "Chicago",
    "Cincinnati",
    "Cleveland",
    "Colorado Springs",
    "Dallas-Ft Worth",
    "Denver",
    "Detroit",
    "Houston",
    "Kansas City",
    "Las Vegas",
    "Los Angeles",
    "Memphis",
    "Miami",
    "Minneapolis-St Paul",
    "New Orleans",
    "New York",
    "Philadelphia",
    "Phoenix",
    "Pittsburgh",
    "Puerto Rico-VI",
    "St Louis",
    "Salt Lake City",
    "San Diego",
    "San Francisco",
    "Seattle",
    "Tampa-Orlando",
];

/// IFR enroute chart coverage areas
pub const ENROUTE_GEONAMES: &[&str] = &["US", "Alaska", "Pacific", "Caribbean"];

/// Terminal procedures region → states and territories it covers, in
/// publication order
pub const TPP_REGIONS: &[(&str, &[&str])] = &[
    ("NE1", &["CT", "MA", "ME", "NH", "RI", "VT"]),
    ("NE2", &["NY"]),
    ("NE3", &["DC", "DE", "MD", "VA", "WV"]),
    ("NE4", &["NJ", "PA"]),
    ("SE1", &["NC", "SC", "TN"]),
    ("SE2", &["AL", "GA"]),
    ("SE3", &["FL"]),
    ("SE4", &["MS", "PR", "VI"]),
    ("EC1", &["MI"]),
    ("EC2", &["IN", "OH"]),
    ("EC3", &["IL", "KY"]),
    ("NC1", &["MN", "ND", "SD"]),
    ("NC2", &["IA", "NE", "WI"]),
    ("NC3", &["KS", "MO"]),
    ("SC1", &["AR", "OK"]),
    ("SC2", &["TX"]),
    ("SC3", &["TX"]),
    ("SC4", &["LA"]),
    ("SC5", &["TX"]),
    ("SW1", &["CA", "NV"]),
    ("SW2", &["CA"]),
    ("SW3", &["AZ", "NM"]),
    ("SW4", &["CO", "UT"]),
    ("NW1", &["ID", "MT", "OR", "WA", "WY"]),
    ("AK1", &["AK"]),
    ("PC1", &["AS", "GU", "HI", "MP"]),
];

/// Chart supplement volume → region code used in file names
pub const SUPPLEMENT_VOLUMES: &[(&str, &str)] = &[
    ("NORTHWEST", "NW"),
    ("SOUTHWEST", "SW"),
    ("NORTHCENTRAL", "NC"),
    ("SOUTHCENTRAL", "SC"),
    ("EASTCENTRAL", "EC"),
    ("SOUTHEAST", "SE"),
    ("NORTHEAST", "NE"),
    ("PACIFIC", "PAC"),
    ("ALASKA", "AK"),
];

/// Terminal procedures regions for a state code, or every region for `US`
///
/// Codes are matched case-insensitively. A state split across several
/// regions (CA, TX) yields all of them.
pub fn tpp_regions(geoname: &str) -> AviationResult<Vec<&'static str>> {
    let code = geoname.trim().to_ascii_uppercase();

    if code == "US" {
        return Ok(TPP_REGIONS.iter().map(|(region, _)| *region).collect());
    }

    let regions: Vec<&'static str> = TPP_REGIONS
        .iter()
        .filter(|(_, states)| states.contains(&code.as_str()))
        .map(|(region, _)| *region)
        .collect();

    if regions.is_empty() {
        Err(AviationError::UnknownRegion(geoname.to_string()))
    } else {
        Ok(regions)
    }
}

/// Region code of a supplement volume
pub fn supplement_region(volume: &str) -> Option<&'static str> {
    SUPPLEMENT_VOLUMES
        .iter()
        .find(|(name, _)| *name == volume)
        .map(|(_, code)| *code)
}

/// Names of every supplement volume, for validation
pub fn supplement_volumes() -> Vec<&'static str> {
    SUPPLEMENT_VOLUMES.iter().map(|(name, _)| *name).collect()
}
