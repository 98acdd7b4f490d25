//! Airports MCP Server
//!
//! Run directly: `airports-mcp` (with `FAA_CLIENT_ID` / `FAA_CLIENT_SECRET` set)

use airports_mcp::AirportsMcpServer;

mcp_common::serve_stdio!(AirportsMcpServer, "airports_mcp");
