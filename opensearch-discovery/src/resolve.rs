//! Resolution of possibly-relative references against a base URL.
//!
//! Only the scheme and host are ever borrowed from the base. Path, query
//! and fragment always come from the reference, so `foo/bar` against
//! `https://example.com/a/b` resolves to `https://example.com/foo/bar`
//! rather than following RFC 3986 merge rules.

use url::Url;

/// Resolve `reference` against `base`.
///
/// - A reference with its own scheme and host is returned as-is (in the
///   normalised form produced by [`Url::parse`]).
/// - A scheme-relative reference (`//host/path`) takes the base's scheme.
/// - Anything else takes the base's scheme and authority, with the path,
///   query and fragment of the reference.
///
/// # Examples
///
/// ```
/// use opensearch_discovery::resolve::resolve;
/// use url::Url;
///
/// let base = Url::parse("https://eu.wikipedia.org").unwrap();
/// let url = resolve("/w/rest.php/v1/search", &base);
/// assert_eq!(url.as_str(), "https://eu.wikipedia.org/w/rest.php/v1/search");
/// ```
pub fn resolve(reference: &str, base: &Url) -> Url {
    let reference = reference.trim();

    if let Ok(absolute) = Url::parse(reference) {
        if absolute.has_host() {
            return absolute;
        }
    }

    if reference.starts_with("//") {
        if let Ok(joined) = base.join(reference) {
            return joined;
        }
    }

    let (rest, fragment) = match reference.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (reference, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    let mut resolved = base.clone();
    if path.starts_with('/') {
        resolved.set_path(path);
    } else {
        resolved.set_path(&format!("/{path}"));
    }
    resolved.set_query(query);
    resolved.set_fragment(fragment);
    resolved
}
