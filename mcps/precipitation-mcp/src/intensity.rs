//! VIL precipitation intensity codes

use serde::Serialize;

/// Description of an intensity code returned by the proximity service
pub fn describe(code: i64) -> &'static str {
    match code {
        -99 => "No VIL value found",
        -97 => "No weather data available",
        -1 => "Clear skies",
        0 => "Very Light precipitation",
        1 => "Light precipitation",
        2 => "Light to moderate rain",
        3 => "Moderate to heavy rain",
        4 => "Heavy rain",
        5 => "Very heavy rain; hail possible",
        6 => "Very heavy rain and hail; large hail possible",
        _ => "Unknown intensity code",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescribedIntensity {
    pub code: i64,
    pub description: &'static str,
}

/// Tool output, with or without descriptions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Intensities {
    Codes { intensities: Vec<i64> },
    Described { intensities: Vec<DescribedIntensity> },
}

impl Intensities {
    pub fn new(codes: Vec<i64>, include_description: bool) -> Self {
        if include_description {
            Self::Described {
                intensities: codes
                    .into_iter()
                    .map(|code| DescribedIntensity {
                        code,
                        description: describe(code),
                    })
                    .collect(),
            }
        } else {
            Self::Codes { intensities: codes }
        }
    }
}
