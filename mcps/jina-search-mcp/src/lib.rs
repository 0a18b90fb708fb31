//! Jina Search MCP Library
//!
//! Web search through the Jina.ai search endpoint, exposed as a single MCP
//! `search` tool.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use jina_search_mcp::{Config, EmbeddableMcp, JinaSearchMcpServer};
//!
//! let server = JinaSearchMcpServer::new(Config::load()?)?;
//! let result = server
//!     .call_tool("search", serde_json::json!({ "query": "rust async", "format": "json" }))
//!     .await?;
//! ```
//!
//! # Configuration
//! `JINAAI_API_KEY` is required. See [`config`] for the optional file and
//! endpoint override.

pub mod config;
pub mod params;
pub mod server;
pub mod upstream;

// Re-export main server type
pub use server::{JinaSearchMcpServer, ERROR_PREFIX, SEARCH_TOOL};

pub use config::{Config, ConfigError, FileConfig};
pub use params::{ResponseFormat, SearchParams};
pub use upstream::{SearchError, UpstreamRequest};

// Re-export EmbeddableMcp trait for in-process usage
pub use mcp_common::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
