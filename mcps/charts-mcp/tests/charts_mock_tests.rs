//! HTTP mock tests for the chart tools.
//!
//! Uses wiremock as the APRA upstream; FAA credentials are fixed test values.

use aviation_common::{Config, Credentials, UpstreamClient};
use charts_mcp::ChartsMcpServer;
use mcp_common::{first_text, is_error, EmbeddableMcp};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TPP_EDITION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<productSet>
  <status code="200" message="OK"/>
  <edition geoname="US" editionName="CURRENT" format="PDF">
    <editionDate>09/04/2025</editionDate>
    <product productName="TPP" url="https://aeronav.faa.gov/upload_313-d/terminal/DDTPPA_250904.zip"/>
  </edition>
</productSet>"#;

const SUPPLEMENT_EDITION: &str = r#"<productSet>
  <edition editionName="CURRENT" editionDate="10/30/2025">
    <product productName="CHART SUPPLEMENT" url="https://aeronav.faa.gov/upload_100-a/supplements/DCS_20251030.zip"/>
  </edition>
</productSet>"#;

fn server_for(mock: &MockServer) -> ChartsMcpServer {
    let credentials = Credentials::default().with_faa("test-id", "test-secret");
    let config = Config::for_base_url(&mock.uri(), credentials);
    let client = UpstreamClient::new(&config.http).unwrap();
    ChartsMcpServer::from_config(&config, client)
}

fn payload(text: Option<&str>) -> Value {
    serde_json::from_str(text.unwrap()).unwrap()
}

#[tokio::test]
async fn test_sectional_defaults() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apra/vfr/sectional/chart"))
        .and(query_param("geoname", "New York"))
        .and(query_param("edition", "current"))
        .and(query_param("format", "pdf"))
        .and(header("client_id", "test-id"))
        .and(header("client_secret", "test-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<productSet/>"))
        .expect(1)
        .mount(&mock)
        .await;

    let result = server_for(&mock)
        .call_tool("get_sectional", json!({ "geoname": "New York" }))
        .await
        .unwrap();

    assert!(!is_error(&result));
    assert_eq!(first_text(&result), Some("<productSet/>"));
}

#[tokio::test]
async fn test_invalid_geoname_makes_no_request() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock)
        .await;

    let result = server_for(&mock)
        .call_tool("get_sectional", json!({ "geoname": "NotARealCity" }))
        .await
        .unwrap();

    assert!(is_error(&result));
    assert!(first_text(&result)
        .unwrap()
        .contains("Invalid value for geoname"));
}

#[tokio::test]
async fn test_tpp_virginia_resolves_to_ne3() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apra/dtpp/chart"))
        .and(query_param("geoname", "US"))
        .and(query_param("edition", "current"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TPP_EDITION))
        .expect(1)
        .mount(&mock)
        .await;

    let result = server_for(&mock)
        .call_tool("get_tpp", json!({ "geoname": "VA" }))
        .await
        .unwrap();

    assert!(!is_error(&result), "{:?}", first_text(&result));
    let body = payload(first_text(&result));
    assert_eq!(body["geoname"], "VA");
    assert_eq!(body["editionDate"], "2025-09-04");
    assert_eq!(
        body["archiveUrl"],
        "https://aeronav.faa.gov/upload_313-d/terminal/DDTPPA_250904.zip"
    );
    assert_eq!(
        body["regions"],
        json!([{
            "region": "NE3",
            "url": "https://aeronav.faa.gov/upload_313-d/terminal/2025-09-04/NE3.pdf"
        }])
    );
}

#[tokio::test]
async fn test_tpp_unknown_state_makes_no_request() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(TPP_EDITION))
        .expect(0)
        .mount(&mock)
        .await;

    let result = server_for(&mock)
        .call_tool("get_tpp", json!({ "geoname": "QQ" }))
        .await
        .unwrap();

    assert!(is_error(&result));
    assert!(first_text(&result)
        .unwrap()
        .contains("Unknown state or region"));
}

#[tokio::test]
async fn test_supplement_url() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apra/supplement/chart"))
        .and(query_param("volume", "NORTHEAST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SUPPLEMENT_EDITION))
        .mount(&mock)
        .await;

    let result = server_for(&mock)
        .call_tool("get_supplement", json!({ "volume": "NORTHEAST" }))
        .await
        .unwrap();

    assert!(!is_error(&result), "{:?}", first_text(&result));
    let body = payload(first_text(&result));
    assert_eq!(body["region"], "NE");
    assert_eq!(body["editionDate"], "2025-10-30");
    assert_eq!(
        body["url"],
        "https://aeronav.faa.gov/upload_100-a/supplements/CS_NE_20251030.pdf"
    );
}

#[tokio::test]
async fn test_malformed_edition_is_reported() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apra/dtpp/chart"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<productSet></productSet>"))
        .mount(&mock)
        .await;

    let result = server_for(&mock)
        .call_tool("get_tpp", json!({}))
        .await
        .unwrap();

    assert!(is_error(&result));
    assert!(first_text(&result).unwrap().starts_with("Error: unexpected Charts response"));
}

#[tokio::test]
async fn test_upstream_error_includes_status() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apra/enroute/chart"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock)
        .await;

    let result = server_for(&mock)
        .call_tool("get_enroute", json!({ "seriesType": "high" }))
        .await
        .unwrap();

    assert!(is_error(&result));
    assert_eq!(
        first_text(&result),
        Some("Error: Charts API Error (401): Unauthorized")
    );
}
