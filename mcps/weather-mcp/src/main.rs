//! Weather MCP Server
//!
//! Aviation weather tools via MCP, backed by aviationweather.gov.
//!
//! # Usage
//!
//! Run directly: `weather-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "weather": { "command": "./weather-mcp" } } }
//! ```

use weather_mcp::WeatherMcpServer;

mcp_common::serve_stdio!(WeatherMcpServer, "weather_mcp");
