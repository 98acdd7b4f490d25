//! Aircraft MCP Library
//!
//! Aircraft specification search via MCP, backed by the API Ninjas aircraft
//! endpoint (`X-Api-Key` from `API_NINJA_KEY`).

pub mod client;
pub mod params;
pub mod server;

pub use client::AircraftApi;
pub use params::AircraftParams;
pub use server::{AircraftMcpServer, TOOLS};

pub use mcp_common::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
