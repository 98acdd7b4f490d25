//! Parameter types for the chart tools
//!
//! Enumerated fields are plain strings here and checked against the fixed
//! catalogs in [`crate::regions`] before any request is made, so a bad value
//! is reported as `Invalid value for <param>` rather than a decode failure.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SectionalParams {
    #[schemars(
        description = "Sectional chart name (e.g., 'New York', 'Chicago', 'Seattle')",
        extend("enum" = [
            "Albuquerque", "Anchorage", "Atlanta", "Bethel", "Billings", "Brownsville",
            "Cape Lisburne", "Charlotte", "Cheyenne", "Chicago", "Cincinnati", "Cold Bay",
            "Dallas-Ft Worth", "Dawson", "Denver", "Detroit", "Dutch Harbor", "El Paso",
            "Fairbanks", "Great Falls", "Green Bay", "Halifax", "Hawaiian Islands", "Houston",
            "Jacksonville", "Juneau", "Kansas City", "Ketchikan", "Klamath Falls", "Kodiak",
            "Lake Huron", "Las Vegas", "Los Angeles", "McGrath", "Memphis", "Miami",
            "Montreal", "New Orleans", "New York", "Nome", "Omaha", "Phoenix",
            "Point Barrow", "Salt Lake City", "San Antonio", "San Francisco", "Seattle",
            "Seward", "St Louis", "Twin Cities", "Washington", "Western Aleutian Islands",
            "Whitehorse", "Wichita"
        ])
    )]
    pub geoname: String,

    #[schemars(
        description = "Chart edition",
        extend("enum" = ["current", "next"], "default" = "current")
    )]
    pub edition: Option<String>,

    #[schemars(
        description = "Format of the chart",
        extend("enum" = ["pdf", "tiff"], "default" = "pdf")
    )]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TacParams {
    #[schemars(
        description = "Terminal Area Chart name (e.g., 'New York', 'Chicago', 'Boston')",
        extend("enum" = [
            "Anchorage-Fairbanks", "Atlanta", "Baltimore-Washington", "Boston", "Charlotte",
            "Chicago", "Cincinnati", "Cleveland", "Colorado Springs", "Dallas-Ft Worth",
            "Denver", "Detroit", "Houston", "Kansas City", "Las Vegas", "Los Angeles",
            "Memphis", "Miami", "Minneapolis-St Paul", "New Orleans", "New York",
            "Philadelphia", "Phoenix", "Pittsburgh", "Puerto Rico-VI", "St Louis",
            "Salt Lake City", "San Diego", "San Francisco", "Seattle", "Tampa-Orlando"
        ])
    )]
    pub geoname: String,

    #[schemars(
        description = "Chart edition",
        extend("enum" = ["current", "next"], "default" = "current")
    )]
    pub edition: Option<String>,

    #[schemars(
        description = "Format of the chart",
        extend("enum" = ["pdf", "tiff"], "default" = "pdf")
    )]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EnrouteParams {
    #[schemars(
        description = "Coverage area of the enroute chart",
        extend("enum" = ["US", "Alaska", "Pacific", "Caribbean"], "default" = "US")
    )]
    pub geoname: Option<String>,

    #[serde(rename = "seriesType")]
    #[schemars(
        description = "Type of enroute chart (low altitude, high altitude, or area)",
        extend("enum" = ["low", "high", "area"], "default" = "low")
    )]
    pub series_type: Option<String>,

    #[schemars(
        description = "Chart edition",
        extend("enum" = ["current", "next"], "default" = "current")
    )]
    pub edition: Option<String>,

    #[schemars(
        description = "Format of the chart",
        extend("enum" = ["pdf", "tiff"], "default" = "pdf")
    )]
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TppParams {
    #[schemars(
        description = "Two-letter state or territory code (e.g., 'VA', 'TX'), or 'US' for every region",
        extend("default" = "US")
    )]
    pub geoname: Option<String>,

    #[schemars(
        description = "Publication edition: the full current cycle or the mid-cycle changeset",
        extend("enum" = ["current", "changeset"], "default" = "current")
    )]
    pub edition: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SupplementParams {
    #[schemars(
        description = "Chart Supplement volume",
        extend("enum" = [
            "NORTHWEST", "SOUTHWEST", "NORTHCENTRAL", "SOUTHCENTRAL", "EASTCENTRAL",
            "SOUTHEAST", "NORTHEAST", "PACIFIC", "ALASKA"
        ])
    )]
    pub volume: String,

    #[schemars(
        description = "Chart edition",
        extend("enum" = ["current", "next"], "default" = "current")
    )]
    pub edition: Option<String>,
}
