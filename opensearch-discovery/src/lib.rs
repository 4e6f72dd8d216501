//! # opensearch-discovery
//!
//! Finds a site's OpenSearch description and turns it into a plain HTML
//! search form.
//!
//! ## Design
//!
//! - Discovery fetches the site's homepage and follows its
//!   `<link rel="search">`; if that fails, the configured URL is fetched as
//!   the description itself
//! - Descriptions are parsed with exact OpenSearch 1.1 namespace matching
//! - The `text/html` endpoint's URL template is split into the
//!   `{searchTerms}` parameter (the visible input) and pass-through hidden
//!   parameters
//! - Sites are processed concurrently; one failing site never affects the
//!   others
//!
//! Network access goes through the [`Fetcher`] trait so the pipeline can
//! run against any transport.

pub mod config;
pub mod description;
pub mod error;
pub mod form;
pub mod http;
pub mod link;
pub mod orchestrator;
pub mod resolve;
pub mod types;

pub use config::DiscoveryConfig;
pub use description::parse_description;
pub use error::{OpenSearchError, Result};
pub use form::derive_form;
pub use http::{FetchResponse, Fetcher, HttpFetcher};
pub use link::extract_search_link;
pub use orchestrator::{Discovered, Discoverer, SiteForm, SiteOutcome};
pub use resolve::resolve;
pub use types::{
    DiscoveryStrategy, Endpoint, FormDescriptor, HiddenInput, OpenSearchDescription, SearchInput,
};

/// Discover and derive search forms for every site using real HTTP.
///
/// Validates `config`, builds the HTTP clients, and runs the per-site
/// pipeline concurrently. Outcomes are returned in the order of `sites`.
///
/// # Errors
///
/// Returns [`OpenSearchError::Config`] if `config` is invalid, or
/// [`OpenSearchError::Network`] if the HTTP clients cannot be built.
/// Per-site failures are reported inside each [`SiteOutcome`], not here.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> opensearch_discovery::Result<()> {
/// let config = opensearch_discovery::DiscoveryConfig::default();
/// let sites = vec!["https://eu.wikipedia.org".to_string()];
/// for outcome in opensearch_discovery::discover_all(&sites, &config).await? {
///     match outcome.result {
///         Ok(found) => println!("{}: {}", outcome.site_url, found.form.action),
///         Err(err) => eprintln!("{}: {err}", outcome.site_url),
///     }
/// }
/// # Ok(())
/// # }
/// ```
pub async fn discover_all(sites: &[String], config: &DiscoveryConfig) -> Result<Vec<SiteOutcome>> {
    let discoverer = Discoverer::from_config(config)?;
    Ok(orchestrator::discover_forms(&discoverer, sites, config).await)
}
