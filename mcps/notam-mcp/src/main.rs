//! NOTAM MCP Server
//!
//! Run directly: `notam-mcp` (with `FAA_CLIENT_ID` / `FAA_CLIENT_SECRET` set)

use notam_mcp::NotamMcpServer;

mcp_common::serve_stdio!(NotamMcpServer, "notam_mcp");
