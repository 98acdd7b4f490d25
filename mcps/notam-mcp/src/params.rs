//! Parameter types for the NOTAM search tool

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Filters accepted by the FAA NOTAM API; only supplied fields are forwarded
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotamParams {
    #[schemars(
        description = "Response format for NOTAM data",
        extend("enum" = ["aixm", "geoJson", "aidap"], "default" = "geoJson")
    )]
    pub response_format: Option<String>,

    #[schemars(
        description = "The ICAO location criteria (e.g., 'KIAD' for Dulles International Airport)"
    )]
    pub icao_location: Option<String>,

    #[schemars(
        description = "The domestic location criteria (e.g., 'IAD' for Dulles International Airport)"
    )]
    pub domestic_location: Option<String>,

    #[schemars(
        description = "The NOTAM type: 'N' for New, 'R' for Replaced, 'C' for Canceled",
        extend("enum" = ["N", "R", "C"])
    )]
    pub notam_type: Option<String>,

    #[schemars(
        description = "The NOTAM classification",
        extend("enum" = ["INTL", "MIL", "DOM", "LMIL", "FDC"])
    )]
    pub classification: Option<String>,

    #[schemars(description = "The NOTAM number (e.g., 'CK0000/01')")]
    pub notam_number: Option<String>,

    #[schemars(description = "The effective start date")]
    pub effective_start_date: Option<String>,

    #[schemars(description = "The effective end date")]
    pub effective_end_date: Option<String>,

    #[schemars(
        description = "The feature type filter",
        extend("enum" = [
            "RWY", "TWY", "APRON", "AD", "OBST", "NAV", "COM", "SVC", "AIRSPACE",
            "ODP", "SID", "STAR", "CHART", "DATA", "DVA", "IAP", "VFP", "ROUTE",
            "SPECIAL", "SECURITY", "MILITARY", "INTERNATIONAL"
        ])
    )]
    pub feature_type: Option<String>,

    #[schemars(description = "The location longitude (e.g., -151.24)")]
    pub location_longitude: Option<f64>,

    #[schemars(description = "The location latitude (e.g., 60.57)")]
    pub location_latitude: Option<f64>,

    #[schemars(description = "The location radius in nautical miles (max: 100)")]
    pub location_radius: Option<f64>,

    #[schemars(description = "The last update date")]
    pub last_updated_date: Option<String>,

    #[schemars(
        description = "The field to sort results by",
        extend("enum" = [
            "icaoLocation", "domesticLocation", "notamType", "notamNumber",
            "effectiveStartDate", "effectiveEndDate", "featureType"
        ])
    )]
    pub sort_by: Option<String>,

    #[schemars(description = "The sort order", extend("enum" = ["Asc", "Desc"]))]
    pub sort_order: Option<String>,

    #[schemars(description = "The page size (max: 1000)", extend("default" = 50))]
    pub page_size: Option<u32>,

    #[schemars(description = "The page number", extend("default" = 1))]
    pub page_num: Option<u32>,
}
