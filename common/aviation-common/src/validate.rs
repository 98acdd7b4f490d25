//! Argument checks that run before any network call

use crate::error::{AviationError, AviationResult};

/// Accept `value` only if it is one of `allowed` (exact match)
pub fn one_of(param: &'static str, value: &str, allowed: &[&str]) -> AviationResult<()> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(AviationError::InvalidValue {
            param,
            value: value.to_string(),
            expected: allowed.join(", "),
        })
    }
}

/// Accept an optional enumerated value, falling back to `default`
pub fn one_of_or<'a>(
    param: &'static str,
    value: Option<&'a str>,
    default: &'a str,
    allowed: &[&str],
) -> AviationResult<&'a str> {
    let value = value.unwrap_or(default);
    one_of(param, value, allowed)?;
    Ok(value)
}

/// Trimmed value of a required string, or `message` if it is blank
pub fn require_non_blank<'a>(value: &'a str, message: &str) -> AviationResult<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AviationError::MissingParameter(message.to_string()))
    } else {
        Ok(trimmed)
    }
}
