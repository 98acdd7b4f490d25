//! Parameter types for the weather tools
//!
//! Enumerated values are advertised in the schema and forwarded as given;
//! aviationweather.gov is the authority on what it accepts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MetarParams {
    #[schemars(description = "Station ID(s) (e.g., 'KJFK', 'KLAX,KJFK')")]
    pub ids: String,

    #[schemars(
        description = "Response format",
        extend("enum" = ["xml", "json"], "default" = "xml")
    )]
    pub format: Option<String>,

    #[schemars(description = "Number of hours of historical data to retrieve")]
    pub hours: Option<i64>,

    #[serde(rename = "mostRecent")]
    #[schemars(
        description = "Whether to return only the most recent observation",
        extend("default" = true)
    )]
    pub most_recent: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TafParams {
    #[schemars(description = "Station ID(s) (e.g., 'KJFK', 'KLAX,KJFK')")]
    pub ids: String,

    #[schemars(
        description = "Response format",
        extend("enum" = ["xml", "json"], "default" = "xml")
    )]
    pub format: Option<String>,

    #[schemars(description = "Number of hours of historical data to retrieve")]
    pub hours_before: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PirepParams {
    #[serde(rename = "type")]
    #[schemars(
        description = "Report type",
        extend("enum" = ["pirep", "airep"], "default" = "pirep")
    )]
    pub kind: Option<String>,

    #[schemars(description = "Geographic bounding box (format: lon1,lat1,lon2,lat2)")]
    pub bbox: Option<String>,

    #[schemars(
        description = "Response format",
        extend("enum" = ["xml", "json"], "default" = "xml")
    )]
    pub format: Option<String>,
}

/// Shared by the domestic SIGMET and international SIGMET tools
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SigmetParams {
    #[schemars(
        description = "Hazard type to filter by (e.g., 'conv', 'turb', 'ice', 'ifr')"
    )]
    pub hazard: Option<String>,

    #[schemars(description = "Flight level to filter by")]
    pub level: Option<i64>,

    #[schemars(
        description = "Response format",
        extend("enum" = ["xml", "json"], "default" = "xml")
    )]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GairmetParams {
    #[serde(rename = "type")]
    #[schemars(
        description = "AIRMET type: sierra (IFR), tango (turbulence), or zulu (icing)",
        extend("enum" = ["sierra", "tango", "zulu"])
    )]
    pub kind: Option<String>,

    #[schemars(
        description = "Hazard type to filter by (e.g., 'turb-hi', 'turb-lo', 'ice', 'ifr')"
    )]
    pub hazard: Option<String>,

    #[schemars(
        description = "Response format",
        extend("enum" = ["xml", "json"], "default" = "xml")
    )]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CwaParams {
    #[schemars(description = "ARTCC identifier (e.g., 'ZAB', 'ZNY')")]
    pub loc: Option<String>,

    #[schemars(description = "Hazard type to filter by (e.g., 'ts', 'turb')")]
    pub hazard: Option<String>,

    #[schemars(
        description = "Response format",
        extend("enum" = ["xml", "json"], "default" = "xml")
    )]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct MisParams {
    #[schemars(description = "ARTCC identifier (e.g., 'ZOB', 'ZNY')")]
    pub loc: Option<String>,

    #[schemars(
        description = "Response format",
        extend("enum" = ["xml", "json"], "default" = "xml")
    )]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FcstDiscParams {
    #[schemars(description = "Weather Forecast Office identifier (e.g., 'KOKX')")]
    pub cwa: String,

    #[serde(rename = "type")]
    #[schemars(
        description = "Discussion type: Aviation Forecast Discussion (afd) or Area Forecast (af)",
        extend("enum" = ["afd", "af"], "default" = "afd")
    )]
    pub kind: Option<String>,

    #[schemars(
        description = "Response format",
        extend("enum" = ["xml", "json"], "default" = "xml")
    )]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct WindTempParams {
    #[schemars(
        description = "Geographic region: all=All sites, bos=Northeast, mia=Southeast, chi=North central, dfw=South central, slc=Rocky Mountain, sfo=Pacific Coast, alaska=Alaska, hawaii=Hawaii, other_pac=Western Pacific",
        extend("enum" = ["all", "us", "bos", "mia", "chi", "dfw", "slc", "sfo", "alaska", "hawaii", "other_pac"])
    )]
    pub region: Option<String>,

    #[schemars(
        description = "Altitude level: low or high",
        extend("enum" = ["low", "high"])
    )]
    pub level: Option<String>,

    #[schemars(
        description = "Forecast cycle: 06, 12, or 24 hours",
        extend("enum" = ["06", "12", "24"])
    )]
    pub fcst: Option<String>,
}

/// Identifier or bounding-box lookup of stations, airports, navaids and fixes
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LocationParams {
    #[schemars(description = "Identifier(s) to look up (e.g., 'KDEN')")]
    pub ids: Option<String>,

    #[schemars(description = "Bounding box coordinates (format: lon1,lat1,lon2,lat2)")]
    pub bbox: Option<String>,

    #[schemars(
        description = "Response format",
        extend("enum" = ["xml", "json"], "default" = "xml")
    )]
    pub format: Option<String>,
}

/// Area lookup of map features and obstacles
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AreaParams {
    #[schemars(description = "Bounding box coordinates (format: lon1,lat1,lon2,lat2)")]
    pub bbox: Option<String>,

    #[schemars(
        description = "Response format",
        extend("enum" = ["json", "geojson", "raw", "xml"], "default" = "xml")
    )]
    pub format: Option<String>,
}
