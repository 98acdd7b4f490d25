//! Parameter types for the precipitation tool

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One coordinate and time to sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    #[schemars(description = "Latitude of point")]
    pub lat: f64,

    #[schemars(description = "Longitude of point")]
    pub lon: f64,

    #[serde(rename = "timeStr")]
    #[schemars(description = "ISO 8601 UTC time string (yyyyMMddTHHmmss)")]
    pub time_str: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrecipitationParams {
    #[schemars(description = "Array of coordinates and times to check precipitation")]
    pub points: Vec<Point>,

    #[serde(default)]
    #[schemars(
        description = "Whether to include human-readable descriptions for precipitation codes",
        extend("default" = false)
    )]
    pub include_description: bool,
}
