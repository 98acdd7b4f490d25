//! Aircraft MCP Server
//!
//! Run directly: `aircraft-mcp` (with `API_NINJA_KEY` set)

use aircraft_mcp::AircraftMcpServer;

mcp_common::serve_stdio!(AircraftMcpServer, "aircraft_mcp");
