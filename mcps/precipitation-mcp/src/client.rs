//! FAA EIM weather proximity service
//!
//! The service takes a JSON array of points and answers with one VIL
//! intensity code per point, in request order.

use std::sync::Arc;

use aviation_common::{Auth, AviationError, AviationResult, FaaCredentials, UpstreamClient};
use serde::Serialize;
use url::Url;

use crate::intensity::Intensities;
use crate::params::{Point, PrecipitationParams};

const API: &str = "EIM";

/// Vertically Integrated Liquid product
const PRODUCT_ID: &str = "VIL";

#[derive(Debug, Serialize)]
struct ProximityPoint<'a> {
    lat: f64,
    lon: f64,
    #[serde(rename = "timeStr")]
    time_str: &'a str,
    #[serde(rename = "prodId")]
    prod_id: &'static str,
}

impl<'a> From<&'a Point> for ProximityPoint<'a> {
    fn from(point: &'a Point) -> Self {
        Self {
            lat: point.lat,
            lon: point.lon,
            time_str: &point.time_str,
            prod_id: PRODUCT_ID,
        }
    }
}

/// Client for the precipitation intensity lookup
#[derive(Debug, Clone)]
pub struct PrecipitationApi {
    client: UpstreamClient,
    url: String,
    faa: Option<Arc<FaaCredentials>>,
}

impl PrecipitationApi {
    pub fn new(
        client: UpstreamClient,
        url: impl Into<String>,
        faa: Option<Arc<FaaCredentials>>,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            faa,
        }
    }

    pub async fn intensities(&self, params: PrecipitationParams) -> AviationResult<String> {
        let creds = self.faa.as_deref().ok_or(AviationError::MissingCredential {
            api: API,
            vars: "FAA_CLIENT_ID and FAA_CLIENT_SECRET",
        })?;

        if params.points.is_empty() {
            return Err(AviationError::MissingParameter(
                "At least one point must be provided".to_string(),
            ));
        }

        let body: Vec<ProximityPoint<'_>> = params.points.iter().map(Into::into).collect();
        let url = Url::parse(&self.url)?;
        let text = self
            .client
            .post_json(API, url, &body, Auth::Faa(creds))
            .await?;

        let codes: Vec<i64> = serde_json::from_str(&text)
            .map_err(|e| AviationError::unexpected(API, format!("expected intensity codes: {e}")))?;
        tracing::debug!(points = body.len(), codes = codes.len(), "received intensities");

        let output = Intensities::new(codes, params.include_description);
        Ok(serde_json::to_string(&output)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_is_tagged_with_vil() {
        let point = Point {
            lat: 38.9,
            lon: -77.0,
            time_str: "20250101T120000".to_string(),
        };
        let value = serde_json::to_value(ProximityPoint::from(&point)).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "lat": 38.9,
                "lon": -77.0,
                "timeStr": "20250101T120000",
                "prodId": "VIL"
            })
        );
    }
}
