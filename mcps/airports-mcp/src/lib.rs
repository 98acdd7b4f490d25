//! Airports MCP Library
//!
//! FAA Airport Data and Information Portal (ADIP) lookups via MCP:
//! airport details, change history and proximity search.

pub mod client;
pub mod params;
pub mod server;

pub use client::AirportsApi;
pub use server::{AirportsMcpServer, TOOLS};

pub use mcp_common::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
