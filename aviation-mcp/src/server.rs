//! Aggregating MCP server
//!
//! Mounts every domain server in-process and exposes the enabled tools
//! through one stdio endpoint. Every call outcome, including unknown names,
//! closed gates and undecodable arguments, is returned as an `isError`
//! result rather than a protocol error.

use std::sync::Arc;

use aircraft_mcp::AircraftMcpServer;
use airports_mcp::AirportsMcpServer;
use aviation_common::{Config, UpstreamClient};
use charts_mcp::ChartsMcpServer;
use mcp_common::{async_trait, tool_error, EmbeddableMcp, EmbeddableResult, McpError};
use notam_mcp::NotamMcpServer;
use precipitation_mcp::PrecipitationMcpServer;
use rmcp::{
    model::{
        CallToolRequestParam, CallToolResult, ListToolsResult, PaginatedRequestParam,
        ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    RoleServer, ServerHandler,
};
use serde_json::Value;
use weather_mcp::WeatherMcpServer;

use crate::gate::{CredentialGate, Domain};
use crate::registry::{Route, ToolRegistry};

const INSTRUCTIONS: &str = "Aviation MCP Server - weather (aviationweather.gov), FAA charts, \
     NOTAMs, airport data and precipitation, and aircraft specifications. Weather tools are \
     always available; FAA tools need FAA_CLIENT_ID and FAA_CLIENT_SECRET, aircraft tools \
     need API_NINJA_KEY.";

/// The aggregating Aviation MCP Server
#[derive(Clone)]
pub struct AviationMcpServer {
    registry: Arc<ToolRegistry>,
    gate: CredentialGate,
}

impl AviationMcpServer {
    pub fn new(registry: ToolRegistry, gate: CredentialGate) -> Self {
        Self {
            registry: Arc::new(registry),
            gate,
        }
    }

    /// Build every domain server from `config` and gate them on its credentials
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = UpstreamClient::new(&config.http)?;

        let mut registry = ToolRegistry::new();
        registry.register(
            Domain::Weather,
            WeatherMcpServer::from_config(config, client.clone()),
        )?;
        registry.register(
            Domain::Charts,
            ChartsMcpServer::from_config(config, client.clone()),
        )?;
        registry.register(
            Domain::Notam,
            NotamMcpServer::from_config(config, client.clone()),
        )?;
        registry.register(
            Domain::Aircraft,
            AircraftMcpServer::from_config(config, client.clone()),
        )?;
        registry.register(
            Domain::Airports,
            AirportsMcpServer::from_config(config, client.clone()),
        )?;
        registry.register(
            Domain::Precipitation,
            PrecipitationMcpServer::from_config(config, client),
        )?;

        let gate = CredentialGate::from_credentials(&config.credentials);
        tracing::info!(
            tools = registry.len(),
            enabled = ?gate.enabled_domains(),
            "tool registry built"
        );

        Ok(Self::new(registry, gate))
    }

    pub fn gate(&self) -> CredentialGate {
        self.gate
    }

    /// Tools of the enabled domains, in catalog order
    pub fn enabled_tools(&self) -> Vec<Tool> {
        self.registry.tools(|domain| self.gate.is_enabled(domain))
    }

    pub fn enabled_routes(&self) -> impl Iterator<Item = &Route> {
        self.registry
            .routes()
            .iter()
            .filter(|route| self.gate.is_enabled(route.domain))
    }

    /// Route one call; never fails at the protocol level
    pub async fn dispatch(&self, name: &str, args: Value) -> CallToolResult {
        let Some(route) = self.registry.route(name) else {
            tracing::warn!(tool = name, "unknown tool");
            return tool_error(format!("Unknown tool: {name}"));
        };

        if let Err(closed) = self.gate.check(route.domain) {
            tracing::warn!(tool = name, domain = %route.domain, "call to disabled domain");
            return tool_error(closed.to_string());
        }

        tracing::debug!(tool = name, domain = %route.domain, "dispatching tool call");
        match route.server().call_tool(name, args).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "tool call rejected");
                e.into_call_result()
            }
        }
    }
}

impl ServerHandler for AviationMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        let tools = self.enabled_tools();
        tracing::debug!(tools = tools.len(), "list_tools");
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let args = Value::Object(request.arguments.unwrap_or_default());
        Ok(self.dispatch(&request.name, args).await)
    }
}

#[async_trait]
impl EmbeddableMcp for AviationMcpServer {
    fn server_name(&self) -> &str {
        "aviation"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.enabled_tools()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        Ok(self.dispatch(name, params).await)
    }
}

/// Serve the aggregated tools over stdio until the client disconnects
pub async fn serve(server: AviationMcpServer) -> anyhow::Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    tracing::info!(
        tools = server.enabled_tools().len(),
        "Starting Aviation MCP Server"
    );

    let service = server.serve(stdio()).await?;

    tracing::info!("Server running on stdio, waiting for requests...");

    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aviation_common::Credentials;
    use mcp_common::{first_text, is_error};
    use serde_json::json;

    // Nothing listens here; gated and rejected calls never reach it
    const UNREACHABLE: &str = "http://127.0.0.1:9";

    fn server(credentials: Credentials) -> AviationMcpServer {
        AviationMcpServer::from_config(&Config::for_base_url(UNREACHABLE, credentials)).unwrap()
    }

    #[test]
    fn test_registry_holds_every_domain() {
        let server = server(Credentials::default());
        assert_eq!(server.registry.len(), 33);
        for domain in Domain::ALL {
            assert!(server.registry.routes().iter().any(|r| r.domain == domain));
        }
    }

    #[test]
    fn test_weather_only_without_credentials() {
        let tools = server(Credentials::default()).enabled_tools();
        assert_eq!(tools.len(), 16);
        assert!(tools.iter().all(|t| t.name.starts_with("get_")));
        assert!(!tools.iter().any(|t| t.name == "get_notams"));
    }

    #[test]
    fn test_all_tools_with_every_credential() {
        let credentials = Credentials::default()
            .with_faa("id", "secret")
            .with_aircraft_key("key");
        let tools = server(credentials).enabled_tools();
        assert_eq!(tools.len(), 33);
        assert!(tools.iter().any(|t| t.name == "search_aircraft"));
        assert!(tools.iter().any(|t| t.name == "get_precipitation"));
    }

    #[test]
    fn test_catalog_order_follows_domains() {
        let credentials = Credentials::default()
            .with_faa("id", "secret")
            .with_aircraft_key("key");
        let expected: Vec<&str> = [
            weather_mcp::TOOLS,
            charts_mcp::TOOLS,
            notam_mcp::TOOLS,
            aircraft_mcp::TOOLS,
            airports_mcp::TOOLS,
            precipitation_mcp::TOOLS,
        ]
        .concat();

        for _ in 0..3 {
            let names: Vec<String> = server(credentials.clone())
                .enabled_tools()
                .into_iter()
                .map(|t| t.name.to_string())
                .collect();
            assert_eq!(names, expected);
        }

        let weather_only = server(Credentials::default()).tool_names();
        assert_eq!(weather_only, weather_mcp::TOOLS);
    }

    #[tokio::test]
    async fn test_gated_call_fails_without_request() {
        let result = server(Credentials::default())
            .dispatch("get_sectional", json!({ "geoname": "Seattle" }))
            .await;
        assert!(is_error(&result));
        assert_eq!(
            first_text(&result),
            Some("Charts tools require FAA API credentials: set FAA_CLIENT_ID and FAA_CLIENT_SECRET")
        );
    }

    #[tokio::test]
    async fn test_aircraft_gate_is_independent_of_faa() {
        let credentials = Credentials::default().with_faa("id", "secret");
        let result = server(credentials)
            .dispatch("search_aircraft", json!({ "manufacturer": "Cessna" }))
            .await;
        assert!(is_error(&result));
        assert!(first_text(&result).unwrap().contains("API_NINJA_KEY"));
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let result = server(Credentials::default())
            .dispatch("get_weather_everywhere", json!({}))
            .await;
        assert!(is_error(&result));
        assert_eq!(first_text(&result), Some("Unknown tool: get_weather_everywhere"));
    }

    #[tokio::test]
    async fn test_bad_arguments_become_error_result() {
        let result = server(Credentials::default())
            .dispatch("get_metar", json!({ "ids": 42 }))
            .await;
        assert!(is_error(&result));
        assert!(first_text(&result)
            .unwrap()
            .starts_with("Invalid arguments for get_metar"));
    }

    #[tokio::test]
    async fn test_validation_runs_behind_open_gate() {
        let credentials = Credentials::default().with_faa("id", "secret");
        let result = server(credentials)
            .dispatch("get_precipitation", json!({ "points": [] }))
            .await;
        assert!(is_error(&result));
        assert_eq!(
            first_text(&result),
            Some("Error: At least one point must be provided")
        );
    }
}
