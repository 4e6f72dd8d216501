//! Error types for the opensearch-discovery crate.
//!
//! Each variant corresponds to one stage of the discovery pipeline so
//! callers can report a stable error kind next to the message.

/// Errors that can occur while discovering, parsing, or deriving a form.
#[derive(Debug, thiserror::Error)]
pub enum OpenSearchError {
    /// The HTML document has no usable `<link rel="search">` element.
    #[error("search link not found: {0}")]
    NotFound(String),

    /// A fetch failed: connection error, non-success status, or timeout.
    #[error("HTTP error: {0}")]
    Network(String),

    /// The description is not well-formed XML or lacks a required element
    /// or attribute.
    #[error("parse error: {0}")]
    Parse(String),

    /// The description has no `text/html` endpoint to build a form from.
    #[error("no text/html endpoint in description \"{0}\"")]
    NoHtmlEndpoint(String),

    /// The `text/html` template does not carry exactly one
    /// `{searchTerms}` query parameter.
    #[error("ambiguous search placeholder: {0}")]
    AmbiguousPlaceholder(String),

    /// Both discovery strategies failed for a site.
    #[error("could not find an OpenSearch description on {site_url}: {source}")]
    Discovery {
        /// The site URL as configured.
        site_url: String,
        /// The failure of the last strategy attempted.
        #[source]
        source: Box<OpenSearchError>,
    },

    /// Invalid discovery configuration.
    #[error("config error: {0}")]
    Config(String),
}

impl OpenSearchError {
    /// Stable short name for this error kind, used in per-site reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::Network(_) => "network",
            Self::Parse(_) => "parse",
            Self::NoHtmlEndpoint(_) => "no_html_endpoint",
            Self::AmbiguousPlaceholder(_) => "ambiguous_placeholder",
            Self::Discovery { .. } => "discovery",
            Self::Config(_) => "config",
        }
    }
}

/// Convenience type alias for opensearch-discovery results.
pub type Result<T> = std::result::Result<T, OpenSearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_not_found() {
        let err = OpenSearchError::NotFound("no <link rel=\"search\"> element".into());
        assert_eq!(
            err.to_string(),
            "search link not found: no <link rel=\"search\"> element"
        );
    }

    #[test]
    fn display_network() {
        let err = OpenSearchError::Network("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_no_html_endpoint() {
        let err = OpenSearchError::NoHtmlEndpoint("Wikipedia (eu)".into());
        assert_eq!(
            err.to_string(),
            "no text/html endpoint in description \"Wikipedia (eu)\""
        );
    }

    #[test]
    fn display_discovery_includes_site_and_cause() {
        let err = OpenSearchError::Discovery {
            site_url: "https://example.com".into(),
            source: Box::new(OpenSearchError::Parse("missing ShortName".into())),
        };
        assert_eq!(
            err.to_string(),
            "could not find an OpenSearch description on https://example.com: parse error: missing ShortName"
        );
    }

    #[test]
    fn discovery_exposes_source() {
        use std::error::Error as _;
        let err = OpenSearchError::Discovery {
            site_url: "https://example.com".into(),
            source: Box::new(OpenSearchError::Network("timed out".into())),
        };
        let source = err.source().map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("HTTP error: timed out"));
    }

    #[test]
    fn kinds_are_distinct() {
        let kinds = [
            OpenSearchError::NotFound(String::new()).kind(),
            OpenSearchError::Network(String::new()).kind(),
            OpenSearchError::Parse(String::new()).kind(),
            OpenSearchError::NoHtmlEndpoint(String::new()).kind(),
            OpenSearchError::AmbiguousPlaceholder(String::new()).kind(),
            OpenSearchError::Config(String::new()).kind(),
        ];
        let unique: std::collections::HashSet<_> = kinds.iter().collect();
        assert_eq!(unique.len(), kinds.len());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OpenSearchError>();
    }
}
