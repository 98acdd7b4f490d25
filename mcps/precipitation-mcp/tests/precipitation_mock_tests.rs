//! HTTP mock tests for the precipitation tool.

use aviation_common::{Config, Credentials, UpstreamClient};
use mcp_common::{first_text, is_error, EmbeddableMcp};
use precipitation_mcp::PrecipitationMcpServer;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn server_for(mock: &MockServer) -> PrecipitationMcpServer {
    let credentials = Credentials::default().with_faa("test-id", "test-secret");
    let config = Config::for_base_url(&mock.uri(), credentials);
    let client = UpstreamClient::new(&config.http).unwrap();
    PrecipitationMcpServer::from_config(&config, client)
}

fn two_points() -> Value {
    json!([
        { "lat": 38.85, "lon": -77.04, "timeStr": "20250601T180000" },
        { "lat": 32.9, "lon": -97.04, "timeStr": "20250601T180000" }
    ])
}

async fn mount_proximity(mock: &MockServer, codes: Value) {
    Mock::given(method("POST"))
        .and(path("/eim/services/proximityList"))
        .and(header("client_id", "test-id"))
        .and(header("accept", "application/json"))
        .and(header("client_secret", "test-secret"))
        .and(body_json(json!([
            { "lat": 38.85, "lon": -77.04, "timeStr": "20250601T180000", "prodId": "VIL" },
            { "lat": 32.9, "lon": -97.04, "timeStr": "20250601T180000", "prodId": "VIL" }
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(codes))
        .expect(1)
        .mount(mock)
        .await;
}

#[tokio::test]
async fn test_codes_without_descriptions() {
    let mock = MockServer::start().await;
    mount_proximity(&mock, json!([-1, 4])).await;

    let result = server_for(&mock)
        .call_tool("get_precipitation", json!({ "points": two_points() }))
        .await
        .unwrap();

    assert!(!is_error(&result), "{:?}", first_text(&result));
    let body: Value = serde_json::from_str(first_text(&result).unwrap()).unwrap();
    assert_eq!(body, json!({ "intensities": [-1, 4] }));
}

#[tokio::test]
async fn test_codes_with_descriptions() {
    let mock = MockServer::start().await;
    mount_proximity(&mock, json!([-1, 9])).await;

    let result = server_for(&mock)
        .call_tool(
            "get_precipitation",
            json!({ "points": two_points(), "includeDescription": true }),
        )
        .await
        .unwrap();

    assert!(!is_error(&result));
    let body: Value = serde_json::from_str(first_text(&result).unwrap()).unwrap();
    assert_eq!(
        body,
        json!({ "intensities": [
            { "code": -1, "description": "Clear skies" },
            { "code": 9, "description": "Unknown intensity code" }
        ]})
    );
}

#[tokio::test]
async fn test_empty_points_makes_no_request() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock)
        .await;

    let result = server_for(&mock)
        .call_tool("get_precipitation", json!({ "points": [] }))
        .await
        .unwrap();

    assert!(is_error(&result));
    assert_eq!(
        first_text(&result),
        Some("Error: At least one point must be provided")
    );
}

#[tokio::test]
async fn test_non_array_response_is_reported() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/eim/services/proximityList"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"ok"}"#))
        .mount(&mock)
        .await;

    let result = server_for(&mock)
        .call_tool("get_precipitation", json!({ "points": two_points() }))
        .await
        .unwrap();

    assert!(is_error(&result));
    assert!(first_text(&result)
        .unwrap()
        .starts_with("Error: unexpected EIM response"));
}

#[tokio::test]
async fn test_upstream_error_names_eim() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/eim/services/proximityList"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock)
        .await;

    let result = server_for(&mock)
        .call_tool("get_precipitation", json!({ "points": two_points() }))
        .await
        .unwrap();

    assert!(is_error(&result));
    assert_eq!(first_text(&result), Some("Error: EIM API Error (500): boom"));
}
