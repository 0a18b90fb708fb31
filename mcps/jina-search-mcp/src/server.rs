//! MCP Server implementation for Jina.ai search
//!
//! Exposes a single `search` tool. Unknown tool names are rejected at the
//! protocol layer with `METHOD_NOT_FOUND`; failures while searching come back
//! as flagged results so the caller can read them.

use mcp_common::{
    async_trait, method_not_found, text_error, text_success, EmbeddableError, EmbeddableMcp,
    EmbeddableResult, McpError, McpResult,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::ToolCallContext, wrapper::Parameters},
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult,
        PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    tool, tool_router, RoleServer,
};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;

use crate::config::Config;
use crate::params::SearchParams;
use crate::upstream::{JinaClient, SearchResult};

/// Name of the only tool this server exposes
pub const SEARCH_TOOL: &str = "search";

/// Prefix for every flagged search failure
pub const ERROR_PREFIX: &str = "Jina.ai API error: ";

const INSTRUCTIONS: &str = "Jina Search MCP Server - searches the web through Jina.ai and \
     returns clean, LLM-friendly content as text or JSON.";

/// The main Jina Search MCP Server
#[derive(Clone)]
pub struct JinaSearchMcpServer {
    client: Arc<JinaClient>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl JinaSearchMcpServer {
    pub fn new(config: Config) -> SearchResult<Self> {
        tracing::info!("Using Jina.ai endpoint {}", config.endpoint());

        Ok(Self {
            client: Arc::new(JinaClient::new(config)?),
            tool_router: Self::tool_router(),
        })
    }

    #[tool(description = "Search the web and get clean, LLM-friendly content using Jina.ai Reader")]
    async fn search(
        &self,
        Parameters(params): Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Searching for: {} (format: {:?})", params.query, params.format);

        match self.client.search(&params).await {
            Ok(text) => Ok(text_success(text)),
            Err(e) => {
                tracing::warn!(status = ?e.status(), "Search failed: {}", e);
                Ok(text_error(format!("{ERROR_PREFIX}{e}")))
            }
        }
    }

    /// Reject names the router does not know before dispatching
    fn check_tool(&self, name: &str) -> McpResult<()> {
        if self.tool_router.list_all().iter().any(|tool| tool.name == name) {
            Ok(())
        } else {
            Err(method_not_found(name))
        }
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[allow(clippy::manual_async_fn)]
impl rmcp::ServerHandler for JinaSearchMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListToolsResult, McpError>> + Send + '_ {
        async move { Ok(ListToolsResult::with_all_items(self.tool_router.list_all())) }
    }

    fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<CallToolResult, McpError>> + Send + '_ {
        async move {
            if let Err(e) = self.check_tool(&request.name) {
                tracing::error!("[MCP Error] {}", e.message);
                return Err(e);
            }
            let tcc = ToolCallContext::new(self, request, context);
            self.tool_router.call(tcc).await
        }
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for JinaSearchMcpServer {
    fn server_name(&self) -> &str {
        "jina-search"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn server_version(&self) -> Option<&str> {
        Some(env!("CARGO_PKG_VERSION"))
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            SEARCH_TOOL => {
                let params: SearchParams = serde_json::from_value(params)?;
                self.search(Parameters(params)).await.map_err(Into::into)
            }
            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FileConfig;
    use rmcp::model::ErrorCode;

    fn test_server() -> JinaSearchMcpServer {
        let config = Config::from_parts(FileConfig::default(), "test-key").unwrap();
        JinaSearchMcpServer::new(config).unwrap()
    }

    #[test]
    fn test_embeddable_server_name() {
        let server = test_server();
        assert_eq!(server.server_name(), "jina-search");
        assert_eq!(server.server_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_lists_single_search_tool() {
        let server = test_server();
        let tools = EmbeddableMcp::list_tools(&server);
        assert_eq!(tools.len(), 1);

        let tool = &tools[0];
        assert_eq!(tool.name, SEARCH_TOOL);
        assert_eq!(
            tool.description.as_deref(),
            Some("Search the web and get clean, LLM-friendly content using Jina.ai Reader")
        );

        let properties = tool.input_schema["properties"].as_object().unwrap();
        assert_eq!(properties.len(), 12);
        assert!(properties.contains_key("query"));
        assert!(properties.contains_key("resolve_redirects"));
    }

    #[test]
    fn test_unknown_tool_is_method_not_found() {
        let server = test_server();
        assert!(server.check_tool(SEARCH_TOOL).is_ok());

        let err = server.check_tool("fetch").unwrap_err();
        assert_eq!(err.code, ErrorCode::METHOD_NOT_FOUND);
        assert_eq!(err.message, "Unknown tool: fetch");
    }

    #[test]
    fn test_server_info() {
        let info = rmcp::ServerHandler::get_info(&test_server());
        assert_eq!(info.server_info.name, "jina-search-mcp");
        assert!(info.capabilities.tools.is_some());
    }

    #[tokio::test]
    async fn test_embeddable_unknown_tool() {
        let server = test_server();
        let result = server.call_tool("nonexistent_tool", serde_json::json!({})).await;
        assert!(matches!(result, Err(EmbeddableError::ToolNotFound(name)) if name == "nonexistent_tool"));
    }

    #[tokio::test]
    async fn test_embeddable_rejects_zero_token_budget() {
        let server = test_server();
        let result = server
            .call_tool(SEARCH_TOOL, serde_json::json!({ "query": "q", "token_budget": 0 }))
            .await;
        assert!(matches!(result, Err(EmbeddableError::InvalidParams(_))));
    }
}
