//! MCP Common - Shared utilities for the aviation MCP servers
//!
//! - **Initialization**: [`LogConfig`], [`init_tracing`] and the
//!   `serve_stdio!` macro for server binaries
//! - **Results**: helpers for building and reading `CallToolResult` envelopes
//! - **Embeddable**: [`EmbeddableMcp`] trait for in-process execution
//!
//! # Example
//!
//! ```rust,ignore
//! use mcp_common::{serve_stdio, text_success, tool_error};
//!
//! // In main.rs
//! serve_stdio!(WeatherMcpServer, "weather_mcp");
//!
//! // In a tool implementation
//! match fetch().await {
//!     Ok(body) => text_success(body),
//!     Err(e) => tool_error(format!("Error: {e}")),
//! }
//! ```

pub mod embeddable;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use embeddable::{in_catalog_order, EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use init::{init_tracing, parse_flag, LogConfig};
pub use result::{first_text, is_error, text_success, tool_error};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
