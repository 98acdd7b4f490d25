//! Parameter types for the aircraft search tool

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Aircraft search filters; unknown keys are rejected
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AircraftParams {
    #[schemars(description = "Company that built the aircraft")]
    pub manufacturer: Option<String>,

    #[schemars(description = "Aircraft model name")]
    pub model: Option<String>,

    #[schemars(
        description = "Type of engine",
        extend("enum" = ["piston", "propjet", "jet"])
    )]
    pub engine_type: Option<String>,

    #[schemars(description = "Minimum max air speed in knots")]
    pub min_speed: Option<f64>,

    #[schemars(description = "Maximum max air speed in knots")]
    pub max_speed: Option<f64>,

    #[schemars(description = "Minimum range in nautical miles")]
    pub min_range: Option<f64>,

    #[schemars(description = "Maximum range in nautical miles")]
    pub max_range: Option<f64>,

    #[schemars(description = "Minimum length in feet")]
    pub min_length: Option<f64>,

    #[schemars(description = "Maximum length in feet")]
    pub max_length: Option<f64>,

    #[schemars(description = "Minimum height in feet")]
    pub min_height: Option<f64>,

    #[schemars(description = "Maximum height in feet")]
    pub max_height: Option<f64>,

    #[schemars(description = "Minimum wingspan in feet")]
    pub min_wingspan: Option<f64>,

    #[schemars(description = "Maximum wingspan in feet")]
    pub max_wingspan: Option<f64>,

    #[schemars(
        description = "How many results to return (1-30)",
        range(min = 1, max = 30),
        extend("default" = 1)
    )]
    pub limit: Option<u32>,
}

impl AircraftParams {
    /// Search fields as query pairs, skipping unset and blank values
    pub(crate) fn filters(&self) -> Vec<(&'static str, String)> {
        let text = [
            ("manufacturer", &self.manufacturer),
            ("model", &self.model),
            ("engine_type", &self.engine_type),
        ];
        let numbers = [
            ("min_speed", self.min_speed),
            ("max_speed", self.max_speed),
            ("min_range", self.min_range),
            ("max_range", self.max_range),
            ("min_length", self.min_length),
            ("max_length", self.max_length),
            ("min_height", self.min_height),
            ("max_height", self.max_height),
            ("min_wingspan", self.min_wingspan),
            ("max_wingspan", self.max_wingspan),
        ];

        text.into_iter()
            .filter_map(|(key, value)| {
                value
                    .as_deref()
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(|v| (key, v.to_string()))
            })
            .chain(
                numbers
                    .into_iter()
                    .filter_map(|(key, value)| value.map(|v| (key, v.to_string()))),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_is_not_a_filter() {
        let params = AircraftParams {
            limit: Some(5),
            ..Default::default()
        };
        assert!(params.filters().is_empty());
    }

    #[test]
    fn test_blank_text_is_not_a_filter() {
        let params = AircraftParams {
            manufacturer: Some("  ".to_string()),
            max_range: Some(1200.0),
            ..Default::default()
        };
        assert_eq!(params.filters(), vec![("max_range", "1200".to_string())]);
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let err = serde_json::from_value::<AircraftParams>(serde_json::json!({
            "manufacturer": "Cessna",
            "color": "red"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("unknown field `color`"));
    }
}
