//! MCP Server implementation for precipitation intensity lookups

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

use crate::client::PrecipitationApi;
use crate::params::PrecipitationParams;

const INSTRUCTIONS: &str = "FAA Precipitation MCP Server - VIL precipitation intensity at \
     coordinates and times via the EIM weather proximity service. \
     Requires FAA_CLIENT_ID and FAA_CLIENT_SECRET.";

/// Tool names, in catalog order
pub const TOOLS: &[&str] = &["get_precipitation"];

/// The main Precipitation MCP Server
#[derive(Clone)]
pub struct PrecipitationMcpServer {
    api: PrecipitationApi,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PrecipitationMcpServer {
    pub fn new(api: PrecipitationApi) -> Self {
        Self {
            api,
            tool_router: Self::tool_router(),
        }
    }

    pub fn from_config(config: &Config, client: UpstreamClient) -> Self {
        Self::new(PrecipitationApi::new(
            client,
            config.endpoints.precipitation.clone(),
            config.credentials.faa.clone(),
        ))
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let config = Config::load(None)?;
        let client = UpstreamClient::new(&config.http)?;
        Ok(Self::from_config(&config, client))
    }

    #[tool(
        description = "Retrieves precipitation intensity data for specified coordinates and times"
    )]
    async fn get_precipitation(
        &self,
        Parameters(params): Parameters<PrecipitationParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.intensities(params).await))
    }
}

#[tool_handler]
impl rmcp::ServerHandler for PrecipitationMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl EmbeddableMcp for PrecipitationMcpServer {
    fn server_name(&self) -> &str {
        "precipitation"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn list_tools(&self) -> Vec<Tool> {
        in_catalog_order(self.tool_router.list_all(), TOOLS)
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "get_precipitation" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_precipitation(Parameters(params))
                    .await
                    .map_err(Into::into)
            }
            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
