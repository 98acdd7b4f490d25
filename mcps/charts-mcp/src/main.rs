//! Charts MCP Server
//!
//! FAA aeronautical chart tools via MCP.
//!
//! # Usage
//!
//! ```json
//! { "mcpServers": { "charts": { "command": "./charts-mcp",
//!   "env": { "FAA_CLIENT_ID": "...", "FAA_CLIENT_SECRET": "..." } } } }
//! ```

use charts_mcp::ChartsMcpServer;

mcp_common::serve_stdio!(ChartsMcpServer, "charts_mcp");
