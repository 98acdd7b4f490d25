//! Charts MCP Library
//!
//! FAA aeronautical chart tools via MCP, backed by the APRA product API:
//! VFR sectional and terminal area charts, IFR enroute charts, terminal
//! procedures and chart supplements.
//!
//! Terminal procedures and supplements are answered with direct PDF links
//! derived from the current edition record, see [`edition`].
//!
//! # Usage as Binary
//!
//! Run directly: `charts-mcp` (with `FAA_CLIENT_ID` / `FAA_CLIENT_SECRET` set)

pub mod client;
pub mod edition;
pub mod params;
pub mod regions;
pub mod server;

pub use client::{ChartsApi, SupplementEdition, TppEdition};
pub use server::{ChartsMcpServer, TOOLS};

pub use mcp_common::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
