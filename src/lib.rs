//! search-portal: a static page of native search boxes for a list of sites.
//!
//! Each configured site is run through OpenSearch discovery, the resulting
//! description is turned into a plain HTML form, and all forms are rendered
//! into one page.
//!
//! # Architecture
//!
//! - **Configuration**: TOML site list and discovery settings ([`config`])
//! - **Discovery**: the [`opensearch_discovery`] crate, run concurrently
//!   across sites
//! - **Page assembly**: askama template with HTML escaping ([`page`])
//! - **Reporting**: JSON per-site outcomes ([`report`])

pub mod config;
pub mod error;
pub mod page;
pub mod report;

pub use config::PortalConfig;
pub use error::{PortalError, Result};

use opensearch_discovery::{FormDescriptor, SiteOutcome};

/// Run discovery for every configured site.
///
/// Outcomes are returned in configuration order. A failing site does not
/// stop the others; its error is carried in its [`SiteOutcome`].
///
/// # Errors
///
/// Returns [`PortalError::Discovery`] only if discovery cannot start (for
/// example, the HTTP client cannot be built).
pub async fn discover_sites(config: &PortalConfig) -> Result<Vec<SiteOutcome>> {
    tracing::info!(sites = config.search.len(), "discovering search forms");
    Ok(opensearch_discovery::discover_all(&config.search, &config.discovery).await?)
}

/// The forms of all successful outcomes, in order.
pub fn successful_forms(outcomes: &[SiteOutcome]) -> Vec<FormDescriptor> {
    outcomes
        .iter()
        .filter_map(|outcome| outcome.result.as_ref().ok())
        .map(|found| found.form.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opensearch_discovery::{DiscoveryStrategy, OpenSearchError, SearchInput, SiteForm};

    fn ok(site: &str, label: &str) -> SiteOutcome {
        SiteOutcome {
            site_url: site.into(),
            result: Ok(SiteForm {
                description_url: format!("{site}/osd.xml"),
                strategy: DiscoveryStrategy::Direct,
                form: FormDescriptor {
                    action: format!("{site}/search"),
                    method: "GET".into(),
                    search_input: SearchInput {
                        name: "q".into(),
                        label: label.into(),
                    },
                    hidden_inputs: vec![],
                },
            }),
        }
    }

    #[test]
    fn successful_forms_skips_failures_and_keeps_order() {
        let outcomes = vec![
            ok("https://a.example", "A"),
            SiteOutcome {
                site_url: "https://b.example".into(),
                result: Err(OpenSearchError::NotFound("no link".into())),
            },
            ok("https://c.example", "C"),
        ];
        let labels: Vec<_> = successful_forms(&outcomes)
            .into_iter()
            .map(|f| f.search_input.label)
            .collect();
        assert_eq!(labels, ["A", "C"]);
    }
}
