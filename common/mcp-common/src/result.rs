//! Result helpers for MCP tool responses

use rmcp::model::{CallToolResult, Content, RawContent};

/// A successful response carrying one text block
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// A flagged failure: a normal response whose `is_error` is set
///
/// Tools return this instead of an `Err` when they ran but could not complete,
/// so the failure reaches the model as readable content rather than a
/// JSON-RPC error.
pub fn text_error(text: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(text.into())])
}

/// First text block of a result, if any
pub fn first_text(result: &CallToolResult) -> Option<&str> {
    result.content.iter().find_map(|c| match &c.raw {
        RawContent::Text(t) => Some(t.text.as_str()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_success() {
        let result = text_success("hello world");
        assert_eq!(result.is_error, Some(false));
        assert_eq!(first_text(&result), Some("hello world"));
    }

    #[test]
    fn test_text_error() {
        let result = text_error("upstream down");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
        assert_eq!(first_text(&result), Some("upstream down"));
    }
}
