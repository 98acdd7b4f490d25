//! aviationweather.gov data API
//!
//! See: https://aviationweather.gov/data/api/
//!
//! Every product lives at `{base}/{product}` and takes plain query
//! parameters. No authentication.

use aviation_common::{join_url, pretty_json, Auth, AviationResult, Query, UpstreamClient};

use crate::params::{
    AreaParams, CwaParams, FcstDiscParams, GairmetParams, LocationParams, MetarParams, MisParams,
    PirepParams, SigmetParams, TafParams, WindTempParams,
};

const API: &str = "Weather";
const DEFAULT_FORMAT: &str = "xml";

/// Client for the aviationweather.gov products
#[derive(Debug, Clone)]
pub struct WeatherApi {
    client: UpstreamClient,
    base_url: String,
}

/// How the upstream body is handed back to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    /// Passed through verbatim
    Raw,
    /// Re-serialized with indentation
    Json,
}

impl Shape {
    fn for_format(format: &str, json_formats: &[&str]) -> Self {
        if json_formats.contains(&format) {
            Shape::Json
        } else {
            Shape::Raw
        }
    }
}

impl WeatherApi {
    pub fn new(client: UpstreamClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn fetch(&self, product: &str, query: Query, shape: Shape) -> AviationResult<String> {
        let url = join_url(&self.base_url, &[product])?;
        let body = self.client.get_text(API, url, &query, Auth::None).await?;
        Ok(match shape {
            Shape::Raw => body,
            Shape::Json => pretty_json(&body),
        })
    }

    /// GET a product with an `xml`/`json` format parameter appended
    async fn fetch_formatted(
        &self,
        product: &str,
        query: Query,
        format: Option<&str>,
    ) -> AviationResult<String> {
        let format = format.unwrap_or(DEFAULT_FORMAT);
        let shape = Shape::for_format(format, &["json"]);
        self.fetch(product, query.param("format", format), shape)
            .await
    }

    pub async fn metar(&self, params: MetarParams) -> AviationResult<String> {
        let query = Query::new()
            .param("ids", &params.ids)
            .opt("hours", params.hours)
            .opt("mostRecent", params.most_recent);
        self.fetch_formatted("metar", query, params.format.as_deref())
            .await
    }

    pub async fn taf(&self, params: TafParams) -> AviationResult<String> {
        let query = Query::new()
            .param("ids", &params.ids)
            .opt("hours_before", params.hours_before);
        self.fetch_formatted("taf", query, params.format.as_deref())
            .await
    }

    pub async fn pirep(&self, params: PirepParams) -> AviationResult<String> {
        let query = Query::new()
            .opt("type", params.kind.as_deref())
            .opt("bbox", params.bbox.as_deref());
        self.fetch_formatted("pirep", query, params.format.as_deref())
            .await
    }

    /// Domestic (`airsigmet`) or international (`isigmet`) SIGMETs
    pub async fn sigmet(&self, product: &str, params: SigmetParams) -> AviationResult<String> {
        let query = Query::new()
            .opt("hazard", params.hazard.as_deref())
            .opt("level", params.level);
        self.fetch_formatted(product, query, params.format.as_deref())
            .await
    }

    pub async fn gairmet(&self, params: GairmetParams) -> AviationResult<String> {
        let query = Query::new()
            .opt("type", params.kind.as_deref())
            .opt("hazard", params.hazard.as_deref());
        self.fetch_formatted("gairmet", query, params.format.as_deref())
            .await
    }

    pub async fn cwa(&self, params: CwaParams) -> AviationResult<String> {
        let query = Query::new()
            .opt("loc", params.loc.as_deref())
            .opt("hazard", params.hazard.as_deref());
        self.fetch_formatted("cwa", query, params.format.as_deref())
            .await
    }

    pub async fn mis(&self, params: MisParams) -> AviationResult<String> {
        let query = Query::new().opt("loc", params.loc.as_deref());
        self.fetch_formatted("mis", query, params.format.as_deref())
            .await
    }

    pub async fn fcstdisc(&self, params: FcstDiscParams) -> AviationResult<String> {
        let query = Query::new()
            .param("cwa", &params.cwa)
            .opt("type", params.kind.as_deref());
        self.fetch_formatted("fcstdisc", query, params.format.as_deref())
            .await
    }

    /// Winds and temperatures aloft; a plain-text product with no format switch
    pub async fn windtemp(&self, params: WindTempParams) -> AviationResult<String> {
        let query = Query::new()
            .opt("region", params.region.as_deref())
            .opt("level", params.level.as_deref())
            .opt("fcst", params.fcst.as_deref());
        self.fetch("windtemp", query, Shape::Raw).await
    }

    /// Station, airport, navaid or fix lookup (`product` is the upstream path)
    pub async fn location(&self, product: &str, params: LocationParams) -> AviationResult<String> {
        let query = Query::new()
            .opt("ids", params.ids.as_deref())
            .opt("bbox", params.bbox.as_deref());
        self.fetch_formatted(product, query, params.format.as_deref())
            .await
    }

    /// Feature or obstacle lookup; `json` and `geojson` are both JSON bodies
    pub async fn area(&self, product: &str, params: AreaParams) -> AviationResult<String> {
        let format = params.format.as_deref().unwrap_or(DEFAULT_FORMAT);
        let query = Query::new()
            .opt("bbox", params.bbox.as_deref())
            .param("format", format);
        self.fetch(product, query, Shape::for_format(format, &["json", "geojson"]))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_for_format() {
        assert_eq!(Shape::for_format("json", &["json"]), Shape::Json);
        assert_eq!(Shape::for_format("xml", &["json"]), Shape::Raw);
        assert_eq!(Shape::for_format("geojson", &["json"]), Shape::Raw);
        assert_eq!(Shape::for_format("geojson", &["json", "geojson"]), Shape::Json);
    }
}
