//! Jina.ai search client
//!
//! Sends an [`UpstreamRequest`] as a bodyless POST and turns the response into
//! the text handed back to the caller.

use reqwest::Client;
use tracing::{debug, instrument};

use super::error::{SearchError, SearchResult};
use super::request::UpstreamRequest;
use crate::config::Config;
use crate::params::{ResponseFormat, SearchParams};

/// HTTP client bound to one endpoint and credential
pub struct JinaClient {
    client: Client,
    config: Config,
}

impl JinaClient {
    pub fn new(config: Config) -> SearchResult<Self> {
        let client = Client::builder()
            .user_agent(config.http.user_agent.as_str())
            .build()?;

        Ok(Self { client, config })
    }

    /// Build the upstream request for `params`
    pub fn request_for(&self, params: &SearchParams) -> UpstreamRequest {
        UpstreamRequest::build(self.config.endpoint(), self.config.api_key(), params)
    }

    /// Run a search and return the text for the caller
    ///
    /// JSON bodies are re-serialized with 2-space indentation; text bodies are
    /// returned unchanged. The body is read in full even when `stream` is set.
    #[instrument(skip(self, params), fields(query = %params.query, format = ?params.format))]
    pub async fn search(&self, params: &SearchParams) -> SearchResult<String> {
        let request = self.request_for(params);
        debug!(url = %request.url, headers = ?request.header_names(), "POST upstream");

        let mut builder = self.client.post(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(SearchError::Upstream { status, body });
        }

        let body = response.text().await?;
        debug!(status = %status, bytes = body.len(), "upstream responded");

        match params.format {
            ResponseFormat::Json => {
                let value: serde_json::Value = serde_json::from_str(&body)?;
                Ok(serde_json::to_string_pretty(&value)?)
            }
            ResponseFormat::Text => Ok(body),
        }
    }
}
