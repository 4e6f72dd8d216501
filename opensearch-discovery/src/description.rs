//! Parsing of OpenSearch 1.1 description documents.
//!
//! Only `ShortName` and `Url` children of the document element that are
//! qualified with [`OPENSEARCH_NS`] are read. Unqualified elements and
//! vendor extensions (e.g. `moz:SearchForm`) are ignored.

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::OpenSearchError;
use crate::types::{Endpoint, OpenSearchDescription, OPENSEARCH_NS};

/// Parse raw description bytes into an [`OpenSearchDescription`].
///
/// Every `Url` element must carry `type` and `template` attributes; a
/// missing `method` defaults to `GET`. Later `Url` elements replace earlier
/// ones with the same `type`.
///
/// # Errors
///
/// Returns [`OpenSearchError::Parse`] if the bytes are not well-formed
/// UTF-8 XML, if there is no namespaced `ShortName`, or if a `Url` element
/// lacks a required attribute.
pub fn parse_description(bytes: &[u8]) -> Result<OpenSearchDescription, OpenSearchError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| OpenSearchError::Parse(format!("description is not UTF-8: {e}")))?;
    let text = text.trim_start_matches('\u{feff}');

    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(text, options)
        .map_err(|e| OpenSearchError::Parse(format!("malformed XML: {e}")))?;
    let root = document.root_element();

    let short_name_node = root
        .children()
        .find(|n| n.has_tag_name((OPENSEARCH_NS, "ShortName")))
        .ok_or_else(|| OpenSearchError::Parse("missing ShortName element".into()))?;
    // Comments and processing instructions inside ShortName are skipped.
    let short_name = short_name_node
        .children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect::<String>()
        .trim()
        .to_string();

    let mut description = OpenSearchDescription::new(short_name);
    for node in root
        .children()
        .filter(|n| n.has_tag_name((OPENSEARCH_NS, "Url")))
    {
        description.insert(parse_endpoint(node)?);
    }

    tracing::debug!(
        short_name = %description.short_name,
        endpoints = description.endpoints().len(),
        "parsed OpenSearch description"
    );

    Ok(description)
}

fn parse_endpoint(node: Node<'_, '_>) -> Result<Endpoint, OpenSearchError> {
    let content_type = required_attribute(node, "type")?;
    let template = required_attribute(node, "template")?;
    let method = node
        .attribute("method")
        .map(str::to_ascii_uppercase)
        .unwrap_or_else(|| "GET".to_string());

    Ok(Endpoint {
        content_type,
        method,
        template,
    })
}

fn required_attribute(node: Node<'_, '_>, name: &str) -> Result<String, OpenSearchError> {
    node.attribute(name).map(str::to_string).ok_or_else(|| {
        let pos = node.document().text_pos_at(node.range().start);
        OpenSearchError::Parse(format!("Url element at {pos} has no {name} attribute"))
    })
}
