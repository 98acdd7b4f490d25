//! NOTAM MCP Library
//!
//! FAA NOTAM search via MCP. Credentials are read from the environment
//! (`FAA_CLIENT_ID`, `FAA_CLIENT_SECRET`), never from tool arguments.

pub mod client;
pub mod params;
pub mod server;

pub use client::NotamApi;
pub use params::NotamParams;
pub use server::{NotamMcpServer, TOOLS};

pub use mcp_common::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
