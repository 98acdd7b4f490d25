//! Mapping upstream outcomes onto tool result envelopes

use mcp_common::{text_success, tool_error, CallToolResult};
use serde_json::Value;

use crate::error::AviationResult;

/// Success text as-is; failures become `Error: <message>` with `is_error` set
pub fn into_tool_result(result: AviationResult<String>) -> CallToolResult {
    match result {
        Ok(text) => text_success(text),
        Err(e) => {
            tracing::warn!(error = %e, "tool call failed");
            tool_error(format!("Error: {e}"))
        }
    }
}

/// Re-serialize a JSON body with two-space indentation
///
/// An empty or whitespace-only body is rendered as `[]`; anything that is
/// not JSON passes through untouched.
pub fn pretty_json(body: &str) -> String {
    if body.trim().is_empty() {
        return "[]".to_string();
    }
    match serde_json::from_str::<Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}
