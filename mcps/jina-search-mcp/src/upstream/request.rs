//! Invocation to upstream request translation
//!
//! Optional parameters map onto Jina.ai request headers through
//! [`OPTIONAL_HEADERS`]; each row emits at most one header and only when the
//! parameter differs from its default.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::params::SearchParams;

pub const AUTHORIZATION: &str = "Authorization";
pub const ACCEPT: &str = "Accept";

/// One optional-parameter to header mapping
pub struct HeaderRule {
    /// Header name sent upstream
    pub header: &'static str,
    /// Header value, `None` when the parameter is unset or at its default
    pub value: fn(&SearchParams) -> Option<String>,
}

/// Characters left as-is in the query path segment: alphanumerics and `-_.!~*'()`
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn enabled(flag: bool) -> Option<String> {
    flag.then(|| "true".to_string())
}

pub const OPTIONAL_HEADERS: &[HeaderRule] = &[
    HeaderRule {
        header: "X-No-Cache",
        value: |p| enabled(p.no_cache),
    },
    HeaderRule {
        header: "X-Token-Budget",
        value: |p| p.token_budget.map(|budget| budget.to_string()),
    },
    HeaderRule {
        header: "X-Locale",
        value: |p| p.browser_locale.clone(),
    },
    HeaderRule {
        header: "X-Stream-Mode",
        value: |p| enabled(p.stream),
    },
    HeaderRule {
        header: "X-With-Links-Summary",
        value: |p| enabled(p.gather_links),
    },
    HeaderRule {
        header: "X-With-Images-Summary",
        value: |p| enabled(p.gather_images),
    },
    HeaderRule {
        header: "X-With-Generated-Alt",
        value: |p| enabled(p.image_caption),
    },
    HeaderRule {
        header: "X-With-Iframe",
        value: |p| enabled(p.enable_iframe),
    },
    HeaderRule {
        header: "X-With-Shadow-Dom",
        value: |p| enabled(p.enable_shadow_dom),
    },
    // Redirects are followed unless explicitly turned off.
    HeaderRule {
        header: "X-No-Redirect",
        value: |p| enabled(!p.resolve_redirects),
    },
];

/// A fully built upstream call: POST `url` with `headers` and no body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    pub url: String,
    pub headers: Vec<(&'static str, String)>,
}

impl UpstreamRequest {
    /// Translate an invocation into the upstream request
    ///
    /// `endpoint` must not end with `/`; [`crate::config::Config`] strips it.
    pub fn build(endpoint: &str, api_key: &str, params: &SearchParams) -> Self {
        let url = format!("{}/{}", endpoint, utf8_percent_encode(&params.query, QUERY_ENCODE_SET));

        let mut headers = vec![
            (AUTHORIZATION, format!("Bearer {api_key}")),
            (ACCEPT, params.format.accept().to_string()),
        ];
        headers.extend(
            OPTIONAL_HEADERS
                .iter()
                .filter_map(|rule| (rule.value)(params).map(|value| (rule.header, value))),
        );

        Self { url, headers }
    }

    /// Value of the first header named `name` (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(header, _)| header.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Header names only, safe to log
    pub fn header_names(&self) -> Vec<&'static str> {
        self.headers.iter().map(|(name, _)| *name).collect()
    }
}
