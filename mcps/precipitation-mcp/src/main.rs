//! Precipitation MCP Server
//!
//! Run directly: `precipitation-mcp` (with `FAA_CLIENT_ID` / `FAA_CLIENT_SECRET` set)

use precipitation_mcp::PrecipitationMcpServer;

mcp_common::serve_stdio!(PrecipitationMcpServer, "precipitation_mcp");
