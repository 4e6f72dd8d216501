//! Extraction of the `<link rel="search">` reference from a homepage.
//!
//! Parsing is delegated to [`scraper`], which is error-tolerant: broken
//! markup elsewhere in the page does not hide a well-formed `<link>`.

use scraper::{Html, Selector};
use url::Url;

use crate::error::OpenSearchError;
use crate::resolve::resolve;

/// Find the first `<link>` whose `rel` contains the `search` token and
/// resolve its `href` against `base_url`.
///
/// # Errors
///
/// Returns [`OpenSearchError::NotFound`] if no such element exists or the
/// first one has no `href`.
pub fn extract_search_link(html: &str, base_url: &Url) -> Result<Url, OpenSearchError> {
    let document = Html::parse_document(html);
    let link_sel = Selector::parse(r#"link[rel~="search"]"#)
        .map_err(|e| OpenSearchError::Parse(format!("invalid link selector: {e:?}")))?;

    let link = document.select(&link_sel).next().ok_or_else(|| {
        OpenSearchError::NotFound(format!("no <link rel=\"search\"> element on {base_url}"))
    })?;

    let href = link.value().attr("href").ok_or_else(|| {
        OpenSearchError::NotFound(format!(
            "<link rel=\"search\"> on {base_url} has no href"
        ))
    })?;

    let resolved = resolve(href, base_url);
    tracing::debug!(%base_url, href, %resolved, "found search link");
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://eu.wikipedia.org").expect("valid base")
    }

    #[test]
    fn resolves_relative_href() {
        let html = r#"<html><head>
            <link rel="search" type="application/opensearchdescription+xml" href="/w/rest.php/v1/search" title="Wikipedia (eu)">
            </head><body></body></html>"#;
        let url = extract_search_link(html, &base()).expect("link found");
        assert_eq!(url.as_str(), "https://eu.wikipedia.org/w/rest.php/v1/search");
    }

    #[test]
    fn absolute_href_kept() {
        let html = r#"<link rel="search" href="https://search.example.org/osd.xml">"#;
        let url = extract_search_link(html, &base()).expect("link found");
        assert_eq!(url.as_str(), "https://search.example.org/osd.xml");
    }

    #[test]
    fn missing_link_is_not_found() {
        let html = r#"<html><head><link rel="stylesheet" href="/s.css"></head></html>"#;
        let err = extract_search_link(html, &base()).unwrap_err();
        assert!(matches!(err, OpenSearchError::NotFound(_)));
    }

    #[test]
    fn link_without_href_is_not_found() {
        let html = r#"<link rel="search" title="no href">
            <link rel="search" href="/second.xml">"#;
        let err = extract_search_link(html, &base()).unwrap_err();
        assert!(matches!(err, OpenSearchError::NotFound(_)));
        assert!(err.to_string().contains("no href"));
    }

    #[test]
    fn rel_with_multiple_tokens_matches() {
        let html = r#"<link rel="alternate search" href="/osd.xml">"#;
        let url = extract_search_link(html, &base()).expect("link found");
        assert_eq!(url.path(), "/osd.xml");
    }

    #[test]
    fn rel_substring_does_not_match() {
        let html = r#"<link rel="searchable" href="/nope.xml">"#;
        assert!(extract_search_link(html, &base()).is_err());
    }

    #[test]
    fn first_matching_link_wins() {
        let html = r#"<link rel="search" href="/first.xml"><link rel="search" href="/second.xml">"#;
        let url = extract_search_link(html, &base()).expect("link found");
        assert_eq!(url.path(), "/first.xml");
    }

    #[test]
    fn malformed_markup_does_not_hide_link() {
        let html = r#"<html><head></span></div>
            <link rel="search" href="/osd.xml">
            </head><body><div><p>unclosed<table><td>cell</b></i>"#;
        let url = extract_search_link(html, &base()).expect("link found");
        assert_eq!(url.as_str(), "https://eu.wikipedia.org/osd.xml");
    }
}
