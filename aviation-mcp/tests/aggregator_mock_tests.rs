//! End-to-end dispatch through the aggregating server against wiremock.

use aviation_common::{Config, Credentials};
use aviation_mcp::AviationMcpServer;
use mcp_common::{first_text, is_error, EmbeddableMcp};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn server_for(mock: &MockServer, credentials: Credentials) -> AviationMcpServer {
    AviationMcpServer::from_config(&Config::for_base_url(&mock.uri(), credentials)).unwrap()
}

#[tokio::test]
async fn test_weather_call_without_credentials() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/data/metar"))
        .and(query_param("ids", "KSEA"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<response/>"))
        .expect(1)
        .mount(&mock)
        .await;

    let result = server_for(&mock, Credentials::default())
        .call_tool("get_metar", json!({ "ids": "KSEA" }))
        .await
        .unwrap();

    assert!(!is_error(&result));
    assert_eq!(first_text(&result), Some("<response/>"));
}

#[tokio::test]
async fn test_closed_gate_sends_nothing() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock)
        .await;

    let server = server_for(&mock, Credentials::default());
    for (tool, args) in [
        ("get_notams", json!({ "icaoLocation": "KIAD" })),
        ("get_airport_details", json!({ "locId": "IAD" })),
        ("search_aircraft", json!({ "model": "A320" })),
    ] {
        let result = server.call_tool(tool, args).await.unwrap();
        assert!(is_error(&result), "{tool} should be gated");
        assert!(first_text(&result).unwrap().contains(" tools require "));
    }
}

#[tokio::test]
async fn test_open_gate_reaches_faa_upstream() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/notamapi/v1/notams"))
        .and(query_param("icaoLocation", "KIAD"))
        .and(header("client_id", "test-id"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"items":[]}"#))
        .expect(1)
        .mount(&mock)
        .await;

    let credentials = Credentials::default().with_faa("test-id", "test-secret");
    let server = server_for(&mock, credentials);
    assert!(server.tool_names().iter().any(|n| n == "get_notams"));

    let result = server
        .call_tool("get_notams", json!({ "icaoLocation": "KIAD" }))
        .await
        .unwrap();
    assert!(!is_error(&result), "{:?}", first_text(&result));
}

#[tokio::test]
async fn test_aircraft_key_reaches_upstream() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/aircraft"))
        .and(query_param("manufacturer", "Cessna"))
        .and(header("X-Api-Key", "ninja"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .expect(1)
        .mount(&mock)
        .await;

    let credentials = Credentials::default().with_aircraft_key("ninja");
    let result = server_for(&mock, credentials)
        .call_tool("search_aircraft", json!({ "manufacturer": "Cessna" }))
        .await
        .unwrap();
    assert!(!is_error(&result), "{:?}", first_text(&result));
    assert_eq!(first_text(&result), Some("[]"));
}
