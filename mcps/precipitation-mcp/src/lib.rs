//! Precipitation MCP Library
//!
//! Precipitation intensity (VIL) lookups against the FAA EIM weather
//! proximity service. Codes can be returned bare or with descriptions from
//! [`intensity::describe`].

pub mod client;
pub mod intensity;
pub mod params;
pub mod server;

pub use client::PrecipitationApi;
pub use params::{Point, PrecipitationParams};
pub use server::{PrecipitationMcpServer, TOOLS};

pub use mcp_common::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
