//! Weather MCP Library
//!
//! Aviation weather tools via MCP, backed by the aviationweather.gov data API.
//! METARs, TAFs, PIREPs, SIGMETs, G-AIRMETs, CWAs, forecast discussions,
//! winds aloft, and station/airport/navaid/fix/feature/obstacle lookups.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use weather_mcp::WeatherMcpServer;
//!
//! let server = WeatherMcpServer::from_config(&config, client);
//! let result = server.call_tool("get_metar", json!({ "ids": "KJFK" })).await?;
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `weather-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "weather": { "command": "./weather-mcp" } } }
//! ```

pub mod client;
pub mod params;
pub mod server;

// Re-export main server type
pub use client::WeatherApi;
pub use server::{WeatherMcpServer, TOOLS};

// Re-export EmbeddableMcp trait for in-process usage
pub use mcp_common::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
