//! Core types: the parsed OpenSearch description and the derived form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The OpenSearch 1.1 namespace URI. Only elements in this namespace are read.
pub const OPENSEARCH_NS: &str = "http://a9.com/-/spec/opensearch/1.1/";

/// Literal placeholder marking where the user's query is substituted.
pub const SEARCH_TERMS_PLACEHOLDER: &str = "{searchTerms}";

/// Content type of the endpoint a browser form submits to.
pub const HTML_CONTENT_TYPE: &str = "text/html";

/// One `<Url>` entry of an OpenSearch description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Content type the endpoint returns, e.g. `text/html`.
    pub content_type: String,
    /// HTTP method, uppercase.
    pub method: String,
    /// URL template containing the `{searchTerms}` placeholder.
    pub template: String,
}

/// A parsed OpenSearch description document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenSearchDescription {
    /// Human-readable search name, used as the form label.
    pub short_name: String,
    /// Endpoints keyed by content type, in order of first appearance.
    endpoints: Vec<Endpoint>,
}

impl OpenSearchDescription {
    /// Create a description with no endpoints.
    pub fn new(short_name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            endpoints: Vec::new(),
        }
    }

    /// Insert an endpoint. An existing endpoint with the same content type
    /// is replaced in place, so the last one read wins.
    pub fn insert(&mut self, endpoint: Endpoint) {
        match self
            .endpoints
            .iter_mut()
            .find(|e| e.content_type == endpoint.content_type)
        {
            Some(existing) => *existing = endpoint,
            None => self.endpoints.push(endpoint),
        }
    }

    /// Look up the endpoint for a content type.
    pub fn endpoint(&self, content_type: &str) -> Option<&Endpoint> {
        self.endpoints.iter().find(|e| e.content_type == content_type)
    }

    /// All endpoints, one per content type.
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }
}

/// The visible text input of a derived form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchInput {
    /// Query parameter that receives the user's search terms.
    pub name: String,
    /// Label shown next to the input (the description's short name).
    pub label: String,
}

/// A query parameter resubmitted verbatim as `<input type="hidden">`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenInput {
    /// Query parameter name.
    pub name: String,
    /// First value of the parameter in the template, decoded.
    pub value: String,
}

/// A submittable HTML search form derived from a `text/html` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDescriptor {
    /// Template URL with its query component removed.
    pub action: String,
    /// HTTP method, uppercase.
    pub method: String,
    /// The visible search box.
    pub search_input: SearchInput,
    /// Remaining query parameters, in template order.
    pub hidden_inputs: Vec<HiddenInput>,
}

/// Which discovery strategy produced a description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryStrategy {
    /// Found through the homepage's `<link rel="search">` element.
    Linked,
    /// The configured URL was itself the description document.
    Direct,
}

impl DiscoveryStrategy {
    /// Returns the human-readable name of this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linked => "linked",
            Self::Direct => "direct",
        }
    }
}

impl fmt::Display for DiscoveryStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
