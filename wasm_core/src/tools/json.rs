// JSON formatter: pretty-print with two-space indentation or minify.
use serde_json::Value;

use crate::error::{Result, ToolError};

/// Parses a JSON document, surfacing the parser's own message on failure.
///
/// # Example
/// ```
/// use jtools_core::tools::json::parse_json;
/// let value = parse_json("{\"id\":1}")?;
/// assert_eq!(value["id"], 1);
/// # Ok::<(), jtools_core::error::ToolError>(())
/// ```
pub fn parse_json(input: &str) -> Result<Value> {
    if input.trim().is_empty() {
        return Err(ToolError::EmptyInput("Paste JSON before formatting."));
    }
    serde_json::from_str(input).map_err(|err| ToolError::InvalidJson(err.to_string()))
}

/// Serializes a value, either compact or with two-space indentation.
pub fn encode_json(value: &Value, minify: bool) -> Result<String> {
    let serialized = if minify {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .map_err(|err| ToolError::InvalidJson(err.to_string()))?;
    Ok(serialized.trim_end().to_string())
}

/// Re-serializes `input` with two-space indentation.
///
/// ```
/// use jtools_core::tools::json::format_json;
/// assert_eq!(format_json("{\"a\":1}")?, "{\n  \"a\": 1\n}");
/// # Ok::<(), jtools_core::error::ToolError>(())
/// ```
pub fn format_json(input: &str) -> Result<String> {
    encode_json(&parse_json(input)?, false)
}

pub fn minify_json(input: &str) -> Result<String> {
    encode_json(&parse_json(input)?, true)
}
