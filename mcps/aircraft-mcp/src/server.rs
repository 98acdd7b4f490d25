//! MCP Server implementation for aircraft specifications

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

use crate::client::AircraftApi;
use crate::params::AircraftParams;

const INSTRUCTIONS: &str = "Aircraft MCP Server - look up aircraft specifications (speed, range, \
     dimensions, engine type) by manufacturer or model. Requires API_NINJA_KEY.";

/// Tool names, in catalog order
pub const TOOLS: &[&str] = &["search_aircraft"];

/// The main Aircraft MCP Server
#[derive(Clone)]
pub struct AircraftMcpServer {
    api: AircraftApi,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl AircraftMcpServer {
    pub fn new(api: AircraftApi) -> Self {
        Self {
            api,
            tool_router: Self::tool_router(),
        }
    }

    pub fn from_config(config: &Config, client: UpstreamClient) -> Self {
        Self::new(AircraftApi::new(
            client,
            config.endpoints.aircraft.clone(),
            config.credentials.aircraft.clone(),
        ))
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let config = Config::load(None)?;
        let client = UpstreamClient::new(&config.http)?;
        Ok(Self::from_config(&config, client))
    }

    #[tool(
        description = "Search for aircraft by manufacturer, model, engine type, speed, range, size, etc."
    )]
    async fn search_aircraft(
        &self,
        Parameters(params): Parameters<AircraftParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.search(params).await))
    }
}

#[tool_handler]
impl rmcp::ServerHandler for AircraftMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl EmbeddableMcp for AircraftMcpServer {
    fn server_name(&self) -> &str {
        "aircraft"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn list_tools(&self) -> Vec<Tool> {
        in_catalog_order(self.tool_router.list_all(), TOOLS)
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "search_aircraft" => {
                let params = EmbeddableError::decode(name, params)?;
                self.search_aircraft(Parameters(params)).await.map_err(Into::into)
            }
            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
