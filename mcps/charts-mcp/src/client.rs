//! FAA Aeronautical Product Release API (APRA)
//!
//! See: https://external-api.faa.gov/apra
//!
//! Sectional, TAC and enroute requests pass the upstream body through.
//! Terminal procedures and chart supplements are resolved to direct PDF
//! download links through [`crate::edition`].

use std::sync::Arc;

use aviation_common::validate::{one_of, one_of_or};
use aviation_common::{
    join_url, Auth, AviationError, AviationResult, FaaCredentials, Query, UpstreamClient,
};
use serde::Serialize;

use crate::edition::{decode_edition, iso_date, supplement_url, tpp_region_urls, RegionUrl};
use crate::params::{EnrouteParams, SectionalParams, SupplementParams, TacParams, TppParams};
use crate::regions::{
    supplement_region, supplement_volumes, tpp_regions, ENROUTE_GEONAMES, SECTIONAL_CHARTS,
    TAC_CHARTS,
};

const API: &str = "Charts";

const EDITIONS: &[&str] = &["current", "next"];
const TPP_EDITIONS: &[&str] = &["current", "changeset"];
const FORMATS: &[&str] = &["pdf", "tiff"];
const SERIES_TYPES: &[&str] = &["low", "high", "area"];

/// Terminal procedures download links for one edition
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TppEdition {
    pub geoname: String,
    pub edition: String,
    pub edition_date: String,
    pub archive_url: String,
    pub regions: Vec<RegionUrl>,
}

/// Chart supplement download link for one volume
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementEdition {
    pub volume: String,
    pub region: String,
    pub edition_date: String,
    pub archive_url: String,
    pub url: String,
}

/// Client for the APRA chart products
#[derive(Debug, Clone)]
pub struct ChartsApi {
    client: UpstreamClient,
    base_url: String,
    faa: Option<Arc<FaaCredentials>>,
}

impl ChartsApi {
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

    async fn fetch(&self, path: &[&str], query: Query) -> AviationResult<String> {
        let creds = self.credentials()?;
        let url = join_url(&self.base_url, path)?;
        self.client.get_text(API, url, &query, Auth::Faa(creds)).await
    }

    pub async fn sectional(&self, params: SectionalParams) -> AviationResult<String> {
        one_of("geoname", &params.geoname, SECTIONAL_CHARTS)?;
        let edition = one_of_or("edition", params.edition.as_deref(), "current", EDITIONS)?;
        let format = one_of_or("format", params.format.as_deref(), "pdf", FORMATS)?;

        let query = Query::new()
            .param("geoname", &params.geoname)
            .param("edition", edition)
            .param("format", format);
        self.fetch(&["vfr", "sectional", "chart"], query).await
    }

    pub async fn tac(&self, params: TacParams) -> AviationResult<String> {
        one_of("geoname", &params.geoname, TAC_CHARTS)?;
        let edition = one_of_or("edition", params.edition.as_deref(), "current", EDITIONS)?;
        let format = one_of_or("format", params.format.as_deref(), "pdf", FORMATS)?;

        let query = Query::new()
            .param("geoname", &params.geoname)
            .param("edition", edition)
            .param("format", format);
        self.fetch(&["vfr", "tac", "chart"], query).await
    }

    pub async fn enroute(&self, params: EnrouteParams) -> AviationResult<String> {
        let geoname = one_of_or("geoname", params.geoname.as_deref(), "US", ENROUTE_GEONAMES)?;
        let series_type = one_of_or(
            "seriesType",
            params.series_type.as_deref(),
            "low",
            SERIES_TYPES,
        )?;
        let edition = one_of_or("edition", params.edition.as_deref(), "current", EDITIONS)?;
        let format = one_of_or("format", params.format.as_deref(), "pdf", FORMATS)?;

        let query = Query::new()
            .param("geoname", geoname)
            .param("seriesType", series_type)
            .param("edition", edition)
            .param("format", format);
        self.fetch(&["enroute", "chart"], query).await
    }

    /// Regions are resolved first; the upstream only serves the national set
    pub async fn tpp(&self, params: TppParams) -> AviationResult<String> {
        let geoname = params.geoname.as_deref().unwrap_or("US").trim().to_ascii_uppercase();
        let regions = tpp_regions(&geoname)?;
        let edition = one_of_or("edition", params.edition.as_deref(), "current", TPP_EDITIONS)?;

        let query = Query::new().param("geoname", "US").param("edition", edition);
        let body = self.fetch(&["dtpp", "chart"], query).await?;
        let record = decode_edition(&body)?;

        tracing::debug!(
            geoname = %geoname,
            regions = regions.len(),
            upload_id = %record.upload_id,
            "resolved terminal procedures edition"
        );

        let output = TppEdition {
            geoname,
            edition: edition.to_string(),
            edition_date: iso_date(&record),
            archive_url: record.product_url.to_string(),
            regions: tpp_region_urls(&record, &regions),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }

    pub async fn supplement(&self, params: SupplementParams) -> AviationResult<String> {
        let region = supplement_region(&params.volume).ok_or_else(|| {
            AviationError::InvalidValue {
                param: "volume",
                value: params.volume.clone(),
                expected: supplement_volumes().join(", "),
            }
        })?;
        let edition = one_of_or("edition", params.edition.as_deref(), "current", EDITIONS)?;

        let query = Query::new()
            .param("volume", &params.volume)
            .param("edition", edition);
        let body = self.fetch(&["supplement", "chart"], query).await?;
        let record = decode_edition(&body)?;

        let output = SupplementEdition {
            volume: params.volume,
            region: region.to_string(),
            edition_date: iso_date(&record),
            archive_url: record.product_url.to_string(),
            url: supplement_url(&record, region),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}
