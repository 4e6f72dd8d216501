//! Derivation of an HTML search form from a description's `text/html`
//! endpoint.
//!
//! The template's query string is split into the one parameter carrying
//! `{searchTerms}`, which becomes the visible input, and everything else,
//! which is resubmitted unchanged through hidden inputs.

use url::Url;

use crate::error::OpenSearchError;
use crate::types::{
    FormDescriptor, HiddenInput, OpenSearchDescription, SearchInput, HTML_CONTENT_TYPE,
    SEARCH_TERMS_PLACEHOLDER,
};

/// Derive the [`FormDescriptor`] for a description.
///
/// Query parameters are decoded with form-urlencoded rules and grouped by
/// name in order of first appearance. Parameters with a blank value are
/// dropped. Hidden inputs carry the first value of each remaining
/// parameter.
///
/// # Errors
///
/// - [`OpenSearchError::NoHtmlEndpoint`] if there is no `text/html` endpoint.
/// - [`OpenSearchError::Parse`] if the template is not a valid URL.
/// - [`OpenSearchError::AmbiguousPlaceholder`] unless exactly one parameter
///   carries `{searchTerms}`, and that parameter is not repeated.
pub fn derive_form(description: &OpenSearchDescription) -> Result<FormDescriptor, OpenSearchError> {
    let endpoint = description
        .endpoint(HTML_CONTENT_TYPE)
        .ok_or_else(|| OpenSearchError::NoHtmlEndpoint(description.short_name.clone()))?;

    let mut action = Url::parse(&endpoint.template).map_err(|e| {
        OpenSearchError::Parse(format!("invalid template {}: {e}", endpoint.template))
    })?;
    let params = group_query(&action);

    let mut with_placeholder = params
        .iter()
        .filter(|(_, values)| values.iter().any(|v| v == SEARCH_TERMS_PLACEHOLDER));
    let (search_name, search_values) = match (with_placeholder.next(), with_placeholder.next()) {
        (Some(param), None) => param,
        (None, _) => {
            return Err(OpenSearchError::AmbiguousPlaceholder(format!(
                "no {SEARCH_TERMS_PLACEHOLDER} parameter in {}",
                endpoint.template
            )))
        }
        (Some(_), Some(_)) => {
            return Err(OpenSearchError::AmbiguousPlaceholder(format!(
                "more than one {SEARCH_TERMS_PLACEHOLDER} parameter in {}",
                endpoint.template
            )))
        }
    };
    if search_values.len() > 1 {
        return Err(OpenSearchError::AmbiguousPlaceholder(format!(
            "parameter {search_name} is repeated in {}",
            endpoint.template
        )));
    }

    let hidden_inputs = params
        .iter()
        .filter(|(name, _)| name != search_name)
        .filter_map(|(name, values)| {
            values.first().map(|value| HiddenInput {
                name: name.clone(),
                value: value.clone(),
            })
        })
        .collect();

    action.set_query(None);

    Ok(FormDescriptor {
        action: action.to_string(),
        method: endpoint.method.to_ascii_uppercase(),
        search_input: SearchInput {
            name: search_name.clone(),
            label: description.short_name.clone(),
        },
        hidden_inputs,
    })
}

/// Decoded query parameters grouped by name, in order of first appearance.
fn group_query(url: &Url) -> Vec<(String, Vec<String>)> {
    let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
    for (name, value) in url.query_pairs() {
        if value.is_empty() {
            continue;
        }
        match grouped.iter_mut().find(|(n, _)| *n == name) {
            Some((_, values)) => values.push(value.into_owned()),
            None => grouped.push((name.into_owned(), vec![value.into_owned()])),
        }
    }
    grouped
}
