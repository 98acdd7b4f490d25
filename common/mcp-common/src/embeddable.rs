//! In-process execution of MCP servers
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly, without a
//! transport in between. The aviation aggregator uses it to mount every
//! domain server behind a single stdio endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//! use weather_mcp::WeatherMcpServer;
//!
//! let server = WeatherMcpServer::new(&config, client);
//! let names: Vec<_> = server.list_tools().into_iter().map(|t| t.name).collect();
//! let result = server
//!     .call_tool("get_metar", serde_json::json!({ "ids": "KJFK" }))
//!     .await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

use crate::result::tool_error;

/// Error type for in-process tool dispatch
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    /// No tool with this name is registered on the server
    #[error("Unknown tool: {0}")]
    ToolNotFound(String),

    /// Arguments did not decode into the tool's parameter type
    #[error("Invalid arguments for {tool}: {source}")]
    InvalidParams {
        tool: String,
        #[source]
        source: serde_json::Error,
    },

    /// MCP protocol error raised by a tool implementation
    #[error("{0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err.message.to_string())
    }
}

impl EmbeddableError {
    /// Decode tool arguments, tagging failures with the tool name
    pub fn decode<T: serde::de::DeserializeOwned>(tool: &str, params: Value) -> EmbeddableResult<T> {
        // Tools without arguments are called with `null` by some clients
        let params = if params.is_null() {
            Value::Object(Default::default())
        } else {
            params
        };
        serde_json::from_value(params).map_err(|source| EmbeddableError::InvalidParams {
            tool: tool.to_string(),
            source,
        })
    }

    /// Render this error as an `isError` result envelope
    pub fn into_call_result(self) -> CallToolResult {
        tool_error(self.to_string())
    }
}

/// Result type for embeddable MCP operations
pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// Sort `tools` into the order of `catalog`
///
/// `ToolRouter::list_all` yields tools in hash order; servers pass the
/// result through this with their declared name list. Names missing from
/// `catalog` go last, alphabetically.
pub fn in_catalog_order(mut tools: Vec<Tool>, catalog: &[&str]) -> Vec<Tool> {
    tools.sort_by_cached_key(|tool| {
        let position = catalog
            .iter()
            .position(|name| *name == tool.name)
            .unwrap_or(catalog.len());
        (position, tool.name.to_string())
    });
    tools
}

/// Trait for MCP servers that can be executed in-process
///
/// Implementations must be `Send + Sync`: the host may run several tool
/// calls concurrently against the same server value.
///
/// Servers built with `#[tool_router]` implement this by returning
/// `self.tool_router.list_all()` through [`in_catalog_order`] from
/// [`list_tools`](Self::list_tools) and
/// matching on the tool name in [`call_tool`](Self::call_tool), decoding the
/// arguments with [`EmbeddableError::decode`].
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Short server name, e.g. `"weather"`
    fn server_name(&self) -> &str;

    /// Every tool this server can execute
    fn list_tools(&self) -> Vec<Tool>;

    /// Executes a tool by name
    ///
    /// Domain failures are reported inside the returned [`CallToolResult`]
    /// (`is_error = true`). `Err` is reserved for dispatch failures: an
    /// unknown name or arguments that do not decode.
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }

    /// Names of every tool, in catalog order
    fn tool_names(&self) -> Vec<String> {
        self.list_tools()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    struct EmptyServer;

    #[async_trait]
    impl EmbeddableMcp for EmptyServer {
        fn server_name(&self) -> &str {
            "empty"
        }

        fn list_tools(&self) -> Vec<Tool> {
            vec![]
        }

        async fn call_tool(&self, name: &str, _params: Value) -> EmbeddableResult<CallToolResult> {
            Err(EmbeddableError::ToolNotFound(name.to_string()))
        }
    }

    fn tool(name: &'static str) -> Tool {
        Tool::new(name, "test tool", std::sync::Arc::new(serde_json::Map::new()))
    }

    #[test]
    fn test_in_catalog_order() {
        let tools = vec![tool("get_taf"), tool("zeta"), tool("get_metar"), tool("alpha")];
        let names: Vec<_> = in_catalog_order(tools, &["get_metar", "get_taf"])
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["get_metar", "get_taf", "alpha", "zeta"]);
    }

    #[derive(Debug, Deserialize)]
    struct IdsParams {
        ids: String,
    }

    #[test]
    fn test_server_name() {
        assert_eq!(EmptyServer.server_name(), "empty");
        assert!(EmptyServer.tool_names().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_tool_renders_name() {
        let err = EmptyServer
            .call_tool("get_weather", serde_json::json!({}))
            .await
            .unwrap_err();
        let result = err.into_call_result();
        assert_eq!(result.is_error, Some(true));
        assert_eq!(crate::first_text(&result), Some("Unknown tool: get_weather"));
    }

    #[test]
    fn test_decode_reports_tool_and_field() {
        let err = EmbeddableError::decode::<IdsParams>("get_metar", serde_json::json!({}))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Invalid arguments for get_metar"));
        assert!(message.contains("ids"));
    }

    #[test]
    fn test_decode_accepts_null_for_empty_params() {
        #[derive(Deserialize)]
        struct NoParams {}
        assert!(EmbeddableError::decode::<NoParams>("noop", Value::Null).is_ok());
    }
}
