//! Parameter types for the airport data tools

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AirportDetailsParams {
    #[schemars(description = "Airport identifier (e.g. SFO)")]
    pub loc_id: String,

    #[schemars(description = "JSONPath filter expression (optional)")]
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ChangesLogsParams {
    #[schemars(description = "Timestamp from when to fetch changes (required)")]
    pub from: String,

    #[schemars(description = "Timestamp until when to fetch changes (optional)")]
    pub to: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangesLogsForLocParams {
    #[schemars(description = "Airport identifier (e.g. SFO)")]
    pub loc_id: String,

    #[schemars(description = "Timestamp from when to fetch changes (optional)")]
    pub from: Option<String>,

    #[schemars(description = "Timestamp until when to fetch changes (optional)")]
    pub to: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangesDiffParams {
    #[schemars(description = "Airport identifier (e.g. SFO)")]
    pub loc_id: String,

    #[schemars(description = "Timestamp from when to fetch differences (required)")]
    pub from: String,

    #[schemars(description = "Timestamp until when to fetch differences (optional)")]
    pub to: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RadiusParams {
    #[schemars(description = "Latitude (required)")]
    pub lat: f64,

    #[schemars(description = "Longitude (required)")]
    pub lon: f64,

    #[schemars(description = "Radius (required)")]
    pub radius: f64,

    #[schemars(
        description = "Unit of radius (optional)",
        extend("enum" = ["KM", "NM", "M", "FT", "MI"], "default" = "KM")
    )]
    pub unit: Option<String>,

    #[schemars(description = "JSONPath filter expression (optional)")]
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RadiusForLocParams {
    #[schemars(description = "Airport identifier (e.g. SFO)")]
    pub loc_id: String,

    #[schemars(description = "Radius (required)")]
    pub radius: f64,

    #[schemars(
        description = "Unit of radius (optional)",
        extend("enum" = ["KM", "NM", "M", "FT", "MI"], "default" = "KM")
    )]
    pub unit: Option<String>,

    #[schemars(description = "JSONPath filter expression (optional)")]
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BboxParams {
    #[schemars(description = "Latitude (required)")]
    pub lat: f64,

    #[schemars(description = "Longitude (required)")]
    pub lon: f64,

    #[schemars(description = "Bounding box as [width,height] (required)")]
    pub bbox: String,

    #[schemars(
        description = "Unit of bbox (optional)",
        extend("enum" = ["KM", "NM", "M", "FT", "MI"], "default" = "KM")
    )]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BboxForLocParams {
    #[schemars(description = "Airport identifier (e.g. SFO)")]
    pub loc_id: String,

    #[schemars(description = "Bounding box as [width,height] (required)")]
    pub bbox: String,

    #[schemars(
        description = "Unit of bbox (optional)",
        extend("enum" = ["KM", "NM", "M", "FT", "MI"], "default" = "KM")
    )]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AirportSearchParams {
    #[schemars(description = "Search object, sent as the JSON request body (see the ADIP API)")]
    pub search: Map<String, Value>,
}
