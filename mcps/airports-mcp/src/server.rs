//! MCP Server implementation for FAA airport data

use aviation_common::{into_tool_result, Config, UpstreamClient};
use mcp_common::{
    async_trait, in_catalog_order, EmbeddableError, EmbeddableMcp, EmbeddableResult, McpError,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use serde_json::Value;

use crate::client::AirportsApi;
use crate::params::{
    AirportDetailsParams, AirportSearchParams, BboxForLocParams, BboxParams, ChangesDiffParams,
    ChangesLogsForLocParams, ChangesLogsParams, RadiusForLocParams, RadiusParams,
};

const INSTRUCTIONS: &str = "FAA Airports MCP Server - airport details, change logs and \
     proximity search from the Airport Data and Information Portal (ADIP). \
     Requires FAA_CLIENT_ID and FAA_CLIENT_SECRET.";

/// Tool names, in catalog order
pub const TOOLS: &[&str] = &[
    "get_airport_details",
    "get_airport_changes_logs",
    "get_airport_changes_logs_for_loc",
    "get_airport_changes_diff",
    "list_airports_radius",
    "list_airports_radius_for_loc",
    "list_airports_bbox",
    "list_airports_bbox_for_loc",
    "airport_search",
];

/// The main Airports MCP Server
#[derive(Clone)]
pub struct AirportsMcpServer {
    api: AirportsApi,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl AirportsMcpServer {
    pub fn new(api: AirportsApi) -> Self {
        Self {
            api,
            tool_router: Self::tool_router(),
        }
    }

    pub fn from_config(config: &Config, client: UpstreamClient) -> Self {
        Self::new(AirportsApi::new(
            client,
            config.endpoints.airports.clone(),
            config.credentials.faa.clone(),
        ))
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let config = Config::load(None)?;
        let client = UpstreamClient::new(&config.http)?;
        Ok(Self::from_config(&config, client))
    }

    #[tool(description = "Get airport details by location ID")]
    async fn get_airport_details(
        &self,
        Parameters(params): Parameters<AirportDetailsParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.details(params).await))
    }

    #[tool(description = "Get airport change logs for all airports")]
    async fn get_airport_changes_logs(
        &self,
        Parameters(params): Parameters<ChangesLogsParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.changes_logs(params).await))
    }

    #[tool(description = "Get airport change logs for a specific airport")]
    async fn get_airport_changes_logs_for_loc(
        &self,
        Parameters(params): Parameters<ChangesLogsForLocParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.changes_logs_for_loc(params).await))
    }

    #[tool(description = "Get differences in airport data between two timestamps")]
    async fn get_airport_changes_diff(
        &self,
        Parameters(params): Parameters<ChangesDiffParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.changes_diff(params).await))
    }

    #[tool(description = "List airports within a radius of a coordinate")]
    async fn list_airports_radius(
        &self,
        Parameters(params): Parameters<RadiusParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.radius(params).await))
    }

    #[tool(description = "List airports within a radius of an airport")]
    async fn list_airports_radius_for_loc(
        &self,
        Parameters(params): Parameters<RadiusForLocParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.radius_for_loc(params).await))
    }

    #[tool(description = "List airports within a bounding box around a coordinate")]
    async fn list_airports_bbox(
        &self,
        Parameters(params): Parameters<BboxParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.bbox(params).await))
    }

    #[tool(description = "List airports within a bounding box around an airport")]
    async fn list_airports_bbox_for_loc(
        &self,
        Parameters(params): Parameters<BboxForLocParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.bbox_for_loc(params).await))
    }

    #[tool(description = "Search airports with a structured query object")]
    async fn airport_search(
        &self,
        Parameters(params): Parameters<AirportSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.search(params).await))
    }
}

#[tool_handler]
impl rmcp::ServerHandler for AirportsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl EmbeddableMcp for AirportsMcpServer {
    fn server_name(&self) -> &str {
        "airports"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn list_tools(&self) -> Vec<Tool> {
        in_catalog_order(self.tool_router.list_all(), TOOLS)
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        let result = match name {
            "get_airport_details" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_airport_details(Parameters(params)).await
            }
            "get_airport_changes_logs" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_airport_changes_logs(Parameters(params)).await
            }
            "get_airport_changes_logs_for_loc" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_airport_changes_logs_for_loc(Parameters(params)).await
            }
            "get_airport_changes_diff" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_airport_changes_diff(Parameters(params)).await
            }
            "list_airports_radius" => {
                let params = EmbeddableError::decode(name, params)?;
                self.list_airports_radius(Parameters(params)).await
            }
            "list_airports_radius_for_loc" => {
                let params = EmbeddableError::decode(name, params)?;
                self.list_airports_radius_for_loc(Parameters(params)).await
            }
            "list_airports_bbox" => {
                let params = EmbeddableError::decode(name, params)?;
                self.list_airports_bbox(Parameters(params)).await
            }
            "list_airports_bbox_for_loc" => {
                let params = EmbeddableError::decode(name, params)?;
                self.list_airports_bbox_for_loc(Parameters(params)).await
            }
            "airport_search" => {
                let params = EmbeddableError::decode(name, params)?;
                self.airport_search(Parameters(params)).await
            }
            _ => return Err(EmbeddableError::ToolNotFound(name.to_string())),
        };
        result.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aviation_common::HttpConfig;
    use serde_json::json;

    fn server() -> AirportsMcpServer {
        let client = UpstreamClient::new(&HttpConfig::default()).unwrap();
        AirportsMcpServer::from_config(&Config::default(), client)
    }

    #[test]
    fn test_catalog() {
        let names = server().tool_names();
        for expected in [
            "get_airport_details",
            "get_airport_changes_logs",
            "get_airport_changes_logs_for_loc",
            "get_airport_changes_diff",
            "list_airports_radius",
            "list_airports_radius_for_loc",
            "list_airports_bbox",
            "list_airports_bbox_for_loc",
            "airport_search",
        ] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn test_loc_id_is_camel_case_and_required() {
        let tools = server().list_tools();
        let details = tools
            .iter()
            .find(|t| t.name == "get_airport_details")
            .unwrap();
        let schema = serde_json::to_value(details.input_schema.as_ref()).unwrap();
        assert!(schema["properties"]["locId"].is_object());
        assert!(schema["required"]
            .as_array()
            .unwrap()
            .contains(&json!("locId")));
    }

    #[tokio::test]
    async fn test_missing_required_field_is_invalid_arguments() {
        let err = server()
            .call_tool("list_airports_radius", json!({ "lat": 37.6 }))
            .await
            .unwrap_err();
        assert!(matches!(err, EmbeddableError::InvalidParams { .. }));
    }

    #[tokio::test]
    async fn test_missing_credentials() {
        let result = server()
            .call_tool("get_airport_details", json!({ "locId": "SFO" }))
            .await
            .unwrap();
        assert_eq!(result.is_error, Some(true));
        assert!(mcp_common::first_text(&result)
            .unwrap()
            .contains("FAA_CLIENT_SECRET"));
    }

    #[test]
    fn test_tools_listed_in_catalog_order() {
        for _ in 0..5 {
            assert_eq!(server().tool_names(), TOOLS);
        }
        assert_eq!(server().list_tools().len(), TOOLS.len());
    }
}
