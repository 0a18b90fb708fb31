//! Protocol-level errors for MCP servers
//!
//! These are the errors a server raises *at the dispatch layer*, as opposed to
//! a tool that ran and failed (see [`crate::text_error`] for that case).

use rmcp::model::ErrorCode;
use rmcp::ErrorData as McpError;

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

/// Error for a `tools/call` naming a tool the server does not expose
///
/// Uses JSON-RPC `-32601` so clients can tell "no such tool" apart from
/// "tool ran and failed".
pub fn method_not_found(tool_name: &str) -> McpError {
    McpError::new(
        ErrorCode::METHOD_NOT_FOUND,
        format!("Unknown tool: {tool_name}"),
        None,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_not_found() {
        let err = method_not_found("fetch");
        assert_eq!(err.code, ErrorCode::METHOD_NOT_FOUND);
        assert_eq!(err.message, "Unknown tool: fetch");
    }
}
