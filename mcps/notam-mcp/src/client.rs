//! FAA NOTAM API
//!
//! See: https://api.faa.gov/s/ (NOTAM API v1)

use std::sync::Arc;

use aviation_common::{
    Auth, AviationError, AviationResult, FaaCredentials, Query, UpstreamClient,
};
use url::Url;

use crate::params::NotamParams;

const API: &str = "NOTAM";
const DEFAULT_RESPONSE_FORMAT: &str = "geoJson";

/// Client for the NOTAM search endpoint
#[derive(Debug, Clone)]
pub struct NotamApi {
    client: UpstreamClient,
    url: String,
    faa: Option<Arc<FaaCredentials>>,
}

impl NotamApi {
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

    /// Search NOTAMs; the upstream body is returned as-is
    pub async fn search(&self, params: NotamParams) -> AviationResult<String> {
        let creds = self.faa.as_deref().ok_or(AviationError::MissingCredential {
            api: API,
            vars: "FAA_CLIENT_ID and FAA_CLIENT_SECRET",
        })?;

        let url = Url::parse(&self.url)?;
        self.client
            .get_json(API, url, &build_query(params), Auth::Faa(creds))
            .await
    }
}

fn build_query(params: NotamParams) -> Query {
    let response_format = params
        .response_format
        .unwrap_or_else(|| DEFAULT_RESPONSE_FORMAT.to_string());

    Query::new()
        .param("responseFormat", response_format)
        .opt("icaoLocation", params.icao_location)
        .opt("domesticLocation", params.domestic_location)
        .opt("notamType", params.notam_type)
        .opt("classification", params.classification)
        .opt("notamNumber", params.notam_number)
        .opt("effectiveStartDate", params.effective_start_date)
        .opt("effectiveEndDate", params.effective_end_date)
        .opt("featureType", params.feature_type)
        .opt("locationLongitude", params.location_longitude)
        .opt("locationLatitude", params.location_latitude)
        .opt("locationRadius", params.location_radius)
        .opt("lastUpdatedDate", params.last_updated_date)
        .opt("sortBy", params.sort_by)
        .opt("sortOrder", params.sort_order)
        .opt("pageSize", params.page_size)
        .opt("pageNum", params.page_num)
}
