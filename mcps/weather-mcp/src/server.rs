//! MCP Server implementation for aviation weather

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

use crate::client::WeatherApi;
use crate::params::{
    AreaParams, CwaParams, FcstDiscParams, GairmetParams, LocationParams, MetarParams, MisParams,
    PirepParams, SigmetParams, TafParams, WindTempParams,
};

const INSTRUCTIONS: &str = "Aviation Weather MCP Server - METARs, TAFs, PIREPs, SIGMETs, \
     G-AIRMETs, CWAs, forecast discussions, winds aloft and station/airport/navaid/fix \
     data from aviationweather.gov. No credentials required.";

/// Tool names, in catalog order
pub const TOOLS: &[&str] = &[
    "get_metar",
    "get_taf",
    "get_pirep",
    "get_airsigmet",
    "get_isigmet",
    "get_gairmet",
    "get_cwa",
    "get_mis",
    "get_fcstdisc",
    "get_windtemp",
    "get_station_info",
    "get_airport_info",
    "get_navaid_info",
    "get_fix_info",
    "get_feature",
    "get_obstacle",
];

/// The main Weather MCP Server
#[derive(Clone)]
pub struct WeatherMcpServer {
    api: WeatherApi,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl WeatherMcpServer {
    pub fn new(api: WeatherApi) -> Self {
        Self {
            api,
            tool_router: Self::tool_router(),
        }
    }

    pub fn from_config(config: &Config, client: UpstreamClient) -> Self {
        Self::new(WeatherApi::new(client, config.endpoints.weather.clone()))
    }

    /// Load config from the default locations and build a standalone server
    pub fn from_env() -> anyhow::Result<Self> {
        let config = Config::load(None)?;
        let client = UpstreamClient::new(&config.http)?;
        Ok(Self::from_config(&config, client))
    }

    #[tool(description = "Retrieves current METAR data for one or more stations")]
    async fn get_metar(
        &self,
        Parameters(params): Parameters<MetarParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.metar(params).await))
    }

    #[tool(description = "Retrieves TAF forecasts for one or more stations")]
    async fn get_taf(
        &self,
        Parameters(params): Parameters<TafParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.taf(params).await))
    }

    #[tool(description = "Retrieves pilot reports (PIREPs) for a specific region")]
    async fn get_pirep(
        &self,
        Parameters(params): Parameters<PirepParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.pirep(params).await))
    }

    #[tool(description = "Retrieves domestic SIGMETs (convective, turbulence, icing, IFR)")]
    async fn get_airsigmet(
        &self,
        Parameters(params): Parameters<SigmetParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.sigmet("airsigmet", params).await))
    }

    #[tool(description = "Retrieves International SIGMET information")]
    async fn get_isigmet(
        &self,
        Parameters(params): Parameters<SigmetParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.sigmet("isigmet", params).await))
    }

    #[tool(description = "Retrieves Graphical AIRMET information")]
    async fn get_gairmet(
        &self,
        Parameters(params): Parameters<GairmetParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.gairmet(params).await))
    }

    #[tool(description = "Retrieves Center Weather Advisory information")]
    async fn get_cwa(
        &self,
        Parameters(params): Parameters<CwaParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.cwa(params).await))
    }

    #[tool(description = "Retrieves Meteorological Impact Statement information")]
    async fn get_mis(
        &self,
        Parameters(params): Parameters<MisParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.mis(params).await))
    }

    #[tool(description = "Retrieves forecast discussions from Weather Forecast Offices")]
    async fn get_fcstdisc(
        &self,
        Parameters(params): Parameters<FcstDiscParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.fcstdisc(params).await))
    }

    #[tool(description = "Retrieves wind and temperature data for specific altitudes")]
    async fn get_windtemp(
        &self,
        Parameters(params): Parameters<WindTempParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.windtemp(params).await))
    }

    #[tool(description = "Retrieves information about weather stations")]
    async fn get_station_info(
        &self,
        Parameters(params): Parameters<LocationParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.location("stationinfo", params).await))
    }

    #[tool(description = "Retrieves information about airports")]
    async fn get_airport_info(
        &self,
        Parameters(params): Parameters<LocationParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.location("airport", params).await))
    }

    #[tool(description = "Retrieves information about navigational aids")]
    async fn get_navaid_info(
        &self,
        Parameters(params): Parameters<LocationParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.location("navaid", params).await))
    }

    #[tool(description = "Retrieves information about navigational fixes")]
    async fn get_fix_info(
        &self,
        Parameters(params): Parameters<LocationParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.location("fix", params).await))
    }

    #[tool(description = "Retrieves feature information within a specified area")]
    async fn get_feature(
        &self,
        Parameters(params): Parameters<AreaParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.area("feature", params).await))
    }

    #[tool(description = "Retrieves obstacle information within a specified area")]
    async fn get_obstacle(
        &self,
        Parameters(params): Parameters<AreaParams>,
    ) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(self.api.area("obstacle", params).await))
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for WeatherMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for WeatherMcpServer {
    fn server_name(&self) -> &str {
        "weather"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn list_tools(&self) -> Vec<Tool> {
        in_catalog_order(self.tool_router.list_all(), TOOLS)
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        let result = match name {
            "get_metar" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_metar(Parameters(params)).await
            }
            "get_taf" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_taf(Parameters(params)).await
            }
            "get_pirep" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_pirep(Parameters(params)).await
            }
            "get_airsigmet" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_airsigmet(Parameters(params)).await
            }
            "get_isigmet" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_isigmet(Parameters(params)).await
            }
            "get_gairmet" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_gairmet(Parameters(params)).await
            }
            "get_cwa" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_cwa(Parameters(params)).await
            }
            "get_mis" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_mis(Parameters(params)).await
            }
            "get_fcstdisc" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_fcstdisc(Parameters(params)).await
            }
            "get_windtemp" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_windtemp(Parameters(params)).await
            }
            "get_station_info" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_station_info(Parameters(params)).await
            }
            "get_airport_info" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_airport_info(Parameters(params)).await
            }
            "get_navaid_info" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_navaid_info(Parameters(params)).await
            }
            "get_fix_info" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_fix_info(Parameters(params)).await
            }
            "get_feature" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_feature(Parameters(params)).await
            }
            "get_obstacle" => {
                let params = EmbeddableError::decode(name, params)?;
                self.get_obstacle(Parameters(params)).await
            }
            _ => return Err(EmbeddableError::ToolNotFound(name.to_string())),
        };
        result.map_err(Into::into)
    }
}
