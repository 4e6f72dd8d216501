//! Portal page assembly.
//!
//! Renders one `<form>` per derived [`FormDescriptor`] into a single
//! standalone HTML page. All values go through askama's HTML escaping.

use askama::Template;
use opensearch_discovery::FormDescriptor;

use crate::error::{PortalError, Result};

#[derive(Template)]
#[template(path = "portal.html")]
struct PortalTemplate<'a> {
    title: &'a str,
    forms: &'a [FormDescriptor],
}

/// Render the portal page with `forms` in the given order.
///
/// # Errors
///
/// Returns [`PortalError::Render`] if template rendering fails.
pub fn render_page(title: &str, forms: &[FormDescriptor]) -> Result<String> {
    PortalTemplate { title, forms }
        .render()
        .map_err(|e| PortalError::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use opensearch_discovery::{HiddenInput, SearchInput};

    fn wikipedia_form() -> FormDescriptor {
        FormDescriptor {
            action: "https://eu.wikipedia.org/w/index.php".into(),
            method: "GET".into(),
            search_input: SearchInput {
                name: "search".into(),
                label: "Wikipedia (eu)".into(),
            },
            hidden_inputs: vec![HiddenInput {
                name: "title".into(),
                value: "Berezi:Bilatu".into(),
            }],
        }
    }

    #[test]
    fn renders_form_with_inputs() {
        let page = render_page("Search", &[wikipedia_form()]).expect("renders");

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#));
        assert!(page.contains("<title>Search</title>"));
        assert!(page.contains(r#"method="GET""#));
        assert!(page.contains("eu.wikipedia.org"));
        assert!(page.contains("index.php"));
        assert!(page.contains(r#"<label>Wikipedia (eu)<input name="search"></label>"#));
        assert!(page.contains(r#"<input type="hidden" name="title" value="Berezi:Bilatu">"#));
        assert!(page.contains(r#"<input type="submit">"#));
    }

    #[test]
    fn forms_keep_given_order() {
        let mut second = wikipedia_form();
        second.search_input.label = "Second".into();
        let mut first = wikipedia_form();
        first.search_input.label = "First".into();

        let page = render_page("Search", &[first, second]).expect("renders");
        let a = page.find("First").expect("first form");
        let b = page.find("Second").expect("second form");
        assert!(a < b);
        assert_eq!(page.matches("<form ").count(), 2);
    }

    #[test]
    fn no_forms_renders_empty_body() {
        let page = render_page("Nothing", &[]).expect("renders");
        assert!(!page.contains("<form"));
        assert!(page.contains("</body>"));
    }

    #[test]
    fn values_are_html_escaped() {
        let mut form = wikipedia_form();
        form.search_input.label = "<b>Tom & Jerry</b>".into();
        form.hidden_inputs[0].value = r#""quoted""#.into();

        let page = render_page("A < B", &[form]).expect("renders");
        assert!(page.contains("&lt;b&gt;Tom &amp; Jerry&lt;"));
        assert!(page.contains("&quot;quoted&quot;"));
        assert!(page.contains("<title>A &lt; B</title>"));
        assert!(!page.contains("<b>Tom"));
    }
}
