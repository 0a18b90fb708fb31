//! Jina Search MCP Server
//!
//! Web search via Jina.ai, served over stdio.
//!
//! # Usage
//!
//! `JINAAI_API_KEY=... jina-search-mcp`
//!
//! Or configure in `.mcp.json`:
//! ```json
//! { "mcpServers": { "jina-search": { "command": "./jina-search-mcp", "env": { "JINAAI_API_KEY": "..." } } } }
//! ```

use anyhow::Context;
use rmcp::{transport::stdio, ServiceExt};

use jina_search_mcp::{Config, JinaSearchMcpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mcp_common::init_tracing("jina_search_mcp")?;

    tracing::info!("Starting Jina Search MCP Server");

    let config = Config::load()?;
    let server = JinaSearchMcpServer::new(config)?;
    let service = server
        .serve(stdio())
        .await
        .context("Failed to start server")?;

    tracing::info!("Jina Search MCP server running on stdio");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
