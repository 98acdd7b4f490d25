//! Aviation MCP
//!
//! One MCP endpoint in front of every aviation data domain:
//!
//! - **Weather**: aviationweather.gov products, always enabled
//! - **Charts**, **NOTAM**, **Airports**, **Precipitation**: FAA APIs, enabled
//!   when `FAA_CLIENT_ID` and `FAA_CLIENT_SECRET` are set
//! - **Aircraft**: API Ninjas specifications, enabled when `API_NINJA_KEY` is set
//!
//! The domain servers are mounted in-process through
//! [`mcp_common::EmbeddableMcp`]; [`CredentialGate`] decides what is listed
//! and what may be called.

pub mod gate;
pub mod registry;
pub mod server;

pub use gate::{CredentialGate, Domain, GateClosed};
pub use registry::{RegistryError, Route, ToolRegistry};
pub use server::{serve, AviationMcpServer};
