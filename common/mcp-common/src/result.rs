//! Result envelope helpers
//!
//! Every tool call answers with a [`CallToolResult`]: a list of content parts
//! plus an `is_error` flag. Failures are carried inside the envelope, so a
//! client always receives a normal protocol response.

use rmcp::model::{CallToolResult, Content, RawContent};

/// Successful response carrying a single text part
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Failed response (`is_error = true`) carrying a single text part
pub fn tool_error(message: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.into())])
}

/// Text of the first content part, if it is a text part
pub fn first_text(result: &CallToolResult) -> Option<&str> {
    result.content.first().and_then(|content| match &content.raw {
        RawContent::Text(text) => Some(text.text.as_str()),
        _ => None,
    })
}

/// Whether the envelope reports a failure
pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error.unwrap_or(false)
}
