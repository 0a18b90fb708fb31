//! Error types for upstream search calls
//!
//! Display strings are what the caller sees after the `Jina.ai API error: `
//! prefix, so the upstream variant shows the response body and nothing else.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while performing a search
#[derive(Error, Debug)]
pub enum SearchError {
    /// The request could not be sent or the body could not be read
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("{body}")]
    Upstream {
        /// HTTP status from upstream
        status: StatusCode,
        /// Response body as text
        body: String,
    },

    /// `format=json` was requested but the body is not valid JSON
    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

impl SearchError {
    /// Upstream status code, when the failure came from a response
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SearchError::Upstream { status, .. } => Some(*status),
            SearchError::Http(e) => e.status(),
            SearchError::Json(_) => None,
        }
    }
}

/// Result type alias for search operations
pub type SearchResult<T> = Result<T, SearchError>;
