//! Parameter types for the search tool

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// How the upstream response is requested and returned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Parsed and pretty-printed JSON
    Json,
    /// Raw response body
    #[default]
    Text,
}

impl ResponseFormat {
    /// `Accept` header value sent upstream
    pub fn accept(self) -> &'static str {
        match self {
            ResponseFormat::Json => "application/json",
            ResponseFormat::Text => "text/plain",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchParams {
    #[schemars(description = "Search query")]
    pub query: String,

    #[schemars(description = "Response format (json or text)")]
    #[serde(default)]
    pub format: ResponseFormat,

    #[schemars(description = "Bypass the upstream cache")]
    #[serde(default)]
    pub no_cache: bool,

    #[schemars(description = "Maximum number of tokens the response may use (at least 1)")]
    #[serde(default)]
    pub token_budget: Option<NonZeroU32>,

    #[schemars(description = "Browser locale used to render pages, e.g. en-US")]
    #[serde(default)]
    pub browser_locale: Option<String>,

    #[schemars(description = "Ask upstream for stream mode")]
    #[serde(default)]
    pub stream: bool,

    #[schemars(description = "Append a summary of all links found on the pages")]
    #[serde(default)]
    pub gather_links: bool,

    #[schemars(description = "Append a summary of all images found on the pages")]
    #[serde(default)]
    pub gather_images: bool,

    #[schemars(description = "Generate captions for images without alt text")]
    #[serde(default)]
    pub image_caption: bool,

    #[schemars(description = "Extract content from iframes")]
    #[serde(default)]
    pub enable_iframe: bool,

    #[schemars(description = "Extract content from shadow DOM")]
    #[serde(default)]
    pub enable_shadow_dom: bool,

    #[schemars(description = "Follow redirects to the final URL (default: true)")]
    #[serde(default = "default_true")]
    pub resolve_redirects: bool,
}

fn default_true() -> bool {
    true
}

impl SearchParams {
    /// Parameters for `query` with every option at its default
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            format: ResponseFormat::default(),
            no_cache: false,
            token_budget: None,
            browser_locale: None,
            stream: false,
            gather_links: false,
            gather_images: false,
            image_caption: false,
            enable_iframe: false,
            enable_shadow_dom: false,
            resolve_redirects: default_true(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_only() {
        let params: SearchParams = serde_json::from_value(json!({ "query": "rust" })).unwrap();
        assert_eq!(params.query, "rust");
        assert_eq!(params.format, ResponseFormat::Text);
        assert!(params.token_budget.is_none());
        assert!(!params.no_cache);
        assert!(params.resolve_redirects);
    }

    #[test]
    fn test_missing_query_rejected() {
        assert!(serde_json::from_value::<SearchParams>(json!({ "format": "json" })).is_err());
    }

    #[test]
    fn test_format_values() {
        let params: SearchParams =
            serde_json::from_value(json!({ "query": "q", "format": "json" })).unwrap();
        assert_eq!(params.format, ResponseFormat::Json);
        assert!(serde_json::from_value::<SearchParams>(json!({ "query": "q", "format": "xml" })).is_err());
    }

    #[test]
    fn test_token_budget_bounds() {
        let params: SearchParams =
            serde_json::from_value(json!({ "query": "q", "token_budget": 42 })).unwrap();
        assert_eq!(params.token_budget.map(NonZeroU32::get), Some(42));

        for bad in [json!(0), json!(-5), json!(1.5), json!("42")] {
            let result = serde_json::from_value::<SearchParams>(json!({ "query": "q", "token_budget": bad }));
            assert!(result.is_err(), "token_budget {bad} should be rejected");
        }
    }

    #[test]
    fn test_schema_advertises_fields() {
        let schema = serde_json::to_value(schemars::schema_for!(SearchParams)).unwrap();
        let properties = schema["properties"].as_object().unwrap();
        for field in [
            "query",
            "format",
            "no_cache",
            "token_budget",
            "browser_locale",
            "stream",
            "gather_links",
            "gather_images",
            "image_caption",
            "enable_iframe",
            "enable_shadow_dom",
            "resolve_redirects",
        ] {
            assert!(properties.contains_key(field), "missing {field}");
        }
        assert_eq!(schema["required"], json!(["query"]));
    }

    #[test]
    fn test_schema_advertises_defaults() {
        let schema = serde_json::to_value(schemars::schema_for!(SearchParams)).unwrap();
        let properties = &schema["properties"];

        assert_eq!(properties["format"]["default"], json!("text"));
        assert_eq!(properties["resolve_redirects"]["default"], json!(true));
        assert_eq!(properties["resolve_redirects"]["type"], json!("boolean"));
        for flag in [
            "no_cache",
            "stream",
            "gather_links",
            "gather_images",
            "image_caption",
            "enable_iframe",
            "enable_shadow_dom",
        ] {
            assert_eq!(properties[flag]["default"], json!(false), "default of {flag}");
            assert_eq!(properties[flag]["type"], json!("boolean"), "type of {flag}");
        }
    }

    #[test]
    fn test_omitted_flags_match_new() {
        let params: SearchParams = serde_json::from_value(json!({ "query": "q" })).unwrap();
        let fresh = SearchParams::new("q");
        assert_eq!(params.resolve_redirects, fresh.resolve_redirects);
        assert_eq!(params.no_cache, fresh.no_cache);
        assert_eq!(params.enable_shadow_dom, fresh.enable_shadow_dom);
    }
}
