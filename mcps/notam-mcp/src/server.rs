//! MCP Server implementation for FAA NOTAMs

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

use crate::client::NotamApi;
use crate::params::NotamParams;

const INSTRUCTIONS: &str = "FAA NOTAM MCP Server - search Notices to Air Missions by location, \
     type, classification, feature and date. Requires FAA_CLIENT_ID and FAA_CLIENT_SECRET.";

/// Tool names, in catalog order
pub const TOOLS: &[&str] = &["get_notams"];

/// The main NOTAM MCP Server
#[derive(Clone)]
pub struct NotamMcpServer {
    api: NotamApi,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl NotamMcpServer {
    pub fn new(api: NotamApi) -> Self {
        Self {
            api,
            tool_router: Self::tool_router(),
        }
    }

    pub fn from_config(config: &Config, client: UpstreamClient) -> Self {
        Self::new(NotamApi::new(
            client,
            config.endpoints.notam.clone(),
            config.credentials.faa.clone(),
        ))
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let config = Config::load(None)?;
        let client = UpstreamClient::new(&config.http)?;
        Ok(Self::from_config(&config, client))
    }

    #[tool(description = "Retrieves NOTAMs based on specified filters")]
    async fn get_notams(
        &self,
        Parameters(params): Parameters<NotamParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.search(params).await))
    }
}

#[tool_handler]
impl rmcp::ServerHandler for NotamMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl EmbeddableMcp for NotamMcpServer {
    fn server_name(&self) -> &str {
        "notam"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn list_tools(&self) -> Vec<Tool> {
        in_catalog_order(self.tool_router.list_all(), TOOLS)
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "get_notams" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_notams(Parameters(params)).await.map_err(Into::into)
            }
            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
