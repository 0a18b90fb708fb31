//! Jina.ai upstream module
//!
//! Request translation, the HTTP client, and the errors a search can raise.

pub mod client;
pub mod error;
pub mod request;

pub use client::JinaClient;
pub use error::{SearchError, SearchResult};
pub use request::{HeaderRule, UpstreamRequest, OPTIONAL_HEADERS};
