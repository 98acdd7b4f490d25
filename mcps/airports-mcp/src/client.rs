//! FAA Airport Data and Information Portal (ADIP) API
//!
//! See: https://external-api.faa.gov/adip
//!
//! Every endpoint answers JSON, which is passed through untouched.

use std::sync::Arc;

use aviation_common::validate::require_non_blank;
use aviation_common::{
    join_url, Auth, AviationError, AviationResult, FaaCredentials, Query, UpstreamClient,
};

use crate::params::{
    AirportDetailsParams, AirportSearchParams, BboxForLocParams, BboxParams, ChangesDiffParams,
    ChangesLogsForLocParams, ChangesLogsParams, RadiusForLocParams, RadiusParams,
};

const API: &str = "ADIP";

/// Distance unit assumed when the caller gives none
const DEFAULT_UNIT: &str = "KM";

/// Client for the ADIP airport endpoints
#[derive(Debug, Clone)]
pub struct AirportsApi {
    client: UpstreamClient,
    base_url: String,
    faa: Option<Arc<FaaCredentials>>,
}

fn loc_id(value: &str) -> AviationResult<&str> {
    require_non_blank(value, "locId is required")
}

fn unit(value: Option<&str>) -> &str {
    value
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .unwrap_or(DEFAULT_UNIT)
}

impl AirportsApi {
    pub fn new(
        client: UpstreamClient,
        base_url: impl Into<String>,
        faa: Option<Arc<FaaCredentials>>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            faa,
        }
    }

    fn credentials(&self) -> AviationResult<&FaaCredentials> {
        self.faa.as_deref().ok_or(AviationError::MissingCredential {
            api: API,
            vars: "FAA_CLIENT_ID and FAA_CLIENT_SECRET",
        })
    }

    async fn get(&self, path: &[&str], query: Query) -> AviationResult<String> {
        let creds = self.credentials()?;
        let url = join_url(&self.base_url, path)?;
        self.client.get_json(API, url, &query, Auth::Faa(creds)).await
    }

    pub async fn details(&self, params: AirportDetailsParams) -> AviationResult<String> {
        let loc = loc_id(&params.loc_id)?;
        let query = Query::new().opt("filter", params.filter.as_deref());
        self.get(&["airport-details", loc], query).await
    }

    pub async fn changes_logs(&self, params: ChangesLogsParams) -> AviationResult<String> {
        let from = require_non_blank(&params.from, "from is required")?;
        let query = Query::new()
            .param("from", from)
            .opt("to", params.to.as_deref());
        self.get(&["airport-changes", "logs"], query).await
    }

    pub async fn changes_logs_for_loc(
        &self,
        params: ChangesLogsForLocParams,
    ) -> AviationResult<String> {
        let loc = loc_id(&params.loc_id)?;
        let query = Query::new()
            .opt("from", params.from.as_deref())
            .opt("to", params.to.as_deref());
        self.get(&["airport-changes", "logs", loc], query).await
    }

    pub async fn changes_diff(&self, params: ChangesDiffParams) -> AviationResult<String> {
        let loc = loc_id(&params.loc_id)?;
        let from = require_non_blank(&params.from, "from is required")?;
        let query = Query::new()
            .param("from", from)
            .opt("to", params.to.as_deref());
        self.get(&["airport-changes", "diff", loc], query).await
    }

    pub async fn radius(&self, params: RadiusParams) -> AviationResult<String> {
        let query = Query::new()
            .param("lat", params.lat)
            .param("lon", params.lon)
            .param("radius", params.radius)
            .param("unit", unit(params.unit.as_deref()))
            .opt("filter", params.filter.as_deref());
        self.get(&["airport-list", "radius"], query).await
    }

    pub async fn radius_for_loc(&self, params: RadiusForLocParams) -> AviationResult<String> {
        let loc = loc_id(&params.loc_id)?;
        let query = Query::new()
            .param("radius", params.radius)
            .param("unit", unit(params.unit.as_deref()))
            .opt("filter", params.filter.as_deref());
        self.get(&["airport-list", "radius", loc], query).await
    }

    pub async fn bbox(&self, params: BboxParams) -> AviationResult<String> {
        let query = Query::new()
            .param("lat", params.lat)
            .param("lon", params.lon)
            .param("bbox", &params.bbox)
            .param("unit", unit(params.unit.as_deref()));
        self.get(&["airport-list", "bbox"], query).await
    }

    pub async fn bbox_for_loc(&self, params: BboxForLocParams) -> AviationResult<String> {
        let loc = loc_id(&params.loc_id)?;
        let query = Query::new()
            .param("bbox", &params.bbox)
            .param("unit", unit(params.unit.as_deref()));
        self.get(&["airport-list", "bbox", loc], query).await
    }

    /// Full-text search; `search` is posted verbatim as the request body
    pub async fn search(&self, params: AirportSearchParams) -> AviationResult<String> {
        let creds = self.credentials()?;
        let url = join_url(&self.base_url, &["airport-search"])?;
        self.client
            .post_json(API, url, &params.search, Auth::Faa(creds))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_defaults_to_km() {
        assert_eq!(unit(None), "KM");
        assert_eq!(unit(Some("  ")), "KM");
        assert_eq!(unit(Some("NM")), "NM");
    }

    #[test]
    fn test_blank_loc_id() {
        let err = loc_id("   ").unwrap_err();
        assert_eq!(err.to_string(), "locId is required");
        assert_eq!(loc_id(" SFO ").unwrap(), "SFO");
    }
}
