//! API Ninjas aircraft specifications
//!
//! See: https://api-ninjas.com/api/aircraft

use std::sync::Arc;

use aviation_common::{ApiKey, Auth, AviationError, AviationResult, Query, UpstreamClient};
use url::Url;

use crate::params::AircraftParams;

const API: &str = "Aircraft";

/// Client for the aircraft lookup endpoint
#[derive(Debug, Clone)]
pub struct AircraftApi {
    client: UpstreamClient,
    url: String,
    key: Option<Arc<ApiKey>>,
}

impl AircraftApi {
    pub fn new(client: UpstreamClient, url: impl Into<String>, key: Option<Arc<ApiKey>>) -> Self {
        Self {
            client,
            url: url.into(),
            key,
        }
    }

    /// Search aircraft; the upstream JSON array is returned as-is
    pub async fn search(&self, params: AircraftParams) -> AviationResult<String> {
        let key = self.key.as_deref().ok_or(AviationError::MissingCredential {
            api: API,
            vars: "API_NINJA_KEY",
        })?;

        let filters = params.filters();
        if filters.is_empty() {
            return Err(AviationError::MissingParameter(
                "At least one search parameter (other than limit) must be provided".to_string(),
            ));
        }

        let query = filters
            .into_iter()
            .fold(Query::new(), |query, (k, v)| query.param(k, v))
            .opt("limit", params.limit);

        let url = Url::parse(&self.url)?;
        self.client
            .get_text(API, url, &query, Auth::ApiKey(key))
            .await
    }
}
