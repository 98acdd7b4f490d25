//! MCP Server implementation for FAA aeronautical charts

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

use crate::client::ChartsApi;
use crate::params::{EnrouteParams, SectionalParams, SupplementParams, TacParams, TppParams};

const INSTRUCTIONS: &str = "FAA Aeronautical Charts MCP Server - sectional, terminal area and \
     IFR enroute charts, terminal procedures (d-TPP) and chart supplements. Requires \
     FAA_CLIENT_ID and FAA_CLIENT_SECRET.";

/// Tool names, in catalog order
pub const TOOLS: &[&str] = &[
    "get_sectional",
    "get_tac",
    "get_enroute",
    "get_tpp",
    "get_supplement",
];

/// The main Charts MCP Server
#[derive(Clone)]
pub struct ChartsMcpServer {
    api: ChartsApi,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl ChartsMcpServer {
    pub fn new(api: ChartsApi) -> Self {
        Self {
            api,
            tool_router: Self::tool_router(),
        }
    }

    pub fn from_config(config: &Config, client: UpstreamClient) -> Self {
        Self::new(ChartsApi::new(
            client,
            config.endpoints.charts.clone(),
            config.credentials.faa.clone(),
        ))
    }

    /// Load config from the default locations and build a standalone server
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Config::load(None)?;
        let client = UpstreamClient::new(&config.http)?;
        Ok(Self::from_config(&config, client))
    }

    #[tool(description = "Retrieves VFR sectional aeronautical charts")]
    async fn get_sectional(
        &self,
        Parameters(params): Parameters<SectionalParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.sectional(params).await))
    }

    #[tool(description = "Retrieves VFR Terminal Area Charts (TAC)")]
    async fn get_tac(
        &self,
        Parameters(params): Parameters<TacParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.tac(params).await))
    }

    #[tool(description = "Retrieves IFR Enroute Charts")]
    async fn get_enroute(
        &self,
        Parameters(params): Parameters<EnrouteParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.enroute(params).await))
    }

    #[tool(
        description = "Retrieves Terminal Procedures Publication (TPP) download links for a state's regions, or for every region with 'US'"
    )]
    async fn get_tpp(
        &self,
        Parameters(params): Parameters<TppParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.tpp(params).await))
    }

    #[tool(description = "Retrieves the Chart Supplement download link for a volume")]
    async fn get_supplement(
        &self,
        Parameters(params): Parameters<SupplementParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.supplement(params).await))
    }
}

#[tool_handler]
impl rmcp::ServerHandler for ChartsMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[async_trait]
impl EmbeddableMcp for ChartsMcpServer {
    fn server_name(&self) -> &str {
        "charts"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn list_tools(&self) -> Vec<Tool> {
        in_catalog_order(self.tool_router.list_all(), TOOLS)
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        let result = match name {
            "get_sectional" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_sectional(Parameters(params)).await
            }
            "get_tac" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_tac(Parameters(params)).await
            }
            "get_enroute" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_enroute(Parameters(params)).await
            }
            "get_tpp" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_tpp(Parameters(params)).await
            }
            "get_supplement" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_supplement(Parameters(params)).await
            }
            _ => return Err(EmbeddableError::ToolNotFound(name.to_string())),
        };
        result.map_err(Into::into)
    }
}
