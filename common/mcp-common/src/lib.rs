//! MCP Common - Shared utilities for MCP servers
//!
//! - **Initialization**: [`init_tracing`] sets up stderr logging
//! - **Results**: [`text_success`] and the flagged [`text_error`]
//! - **Errors**: protocol-level errors such as [`method_not_found`]
//! - **Embeddable**: [`EmbeddableMcp`] trait for in-process execution
//!
//! Servers keep two failure channels apart: a tool that does not exist is a
//! JSON-RPC error, a tool that ran and failed is a normal result with
//! `is_error` set.

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{method_not_found, McpResult};
pub use init::{init_tracing, LogFormat};
pub use result::{first_text, text_error, text_success};

pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

pub use async_trait::async_trait;
