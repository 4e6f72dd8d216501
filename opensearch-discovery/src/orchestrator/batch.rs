//! Concurrent discovery across all configured sites.
//!
//! Sites share no state, so each site's pipeline (discover, parse, derive)
//! runs concurrently up to `max_concurrent_sites`. Outcomes come back in
//! configuration order. A failing or timed-out site never aborts the others.

use std::time::Duration;

use futures::stream::{self, StreamExt};

use crate::config::DiscoveryConfig;
use crate::error::OpenSearchError;
use crate::form::derive_form;
use crate::http::Fetcher;
use crate::types::{DiscoveryStrategy, FormDescriptor};

use super::discover::Discoverer;

/// A form derived for one site, with where its description came from.
#[derive(Debug, Clone)]
pub struct SiteForm {
    /// Where the description was read from.
    pub description_url: String,
    /// Which discovery strategy succeeded.
    pub strategy: DiscoveryStrategy,
    /// The derived form.
    pub form: FormDescriptor,
}

/// Result of running the pipeline for one configured site.
#[derive(Debug)]
pub struct SiteOutcome {
    /// The site URL as configured.
    pub site_url: String,
    /// The derived form, or why this site produced none.
    pub result: Result<SiteForm, OpenSearchError>,
}

/// Run discovery and form derivation for a single site.
///
/// # Errors
///
/// Propagates the discovery error, or the form derivation error for a
/// description that was found but cannot be turned into a form.
pub async fn discover_form<F: Fetcher>(
    discoverer: &Discoverer<F>,
    site_url: &str,
) -> Result<SiteForm, OpenSearchError> {
    let discovered = discoverer.discover(site_url).await?;
    let form = derive_form(&discovered.description)?;
    tracing::debug!(
        site = site_url,
        strategy = %discovered.strategy,
        action = %form.action,
        hidden = form.hidden_inputs.len(),
        "form derived"
    );
    Ok(SiteForm {
        description_url: discovered.description_url.to_string(),
        strategy: discovered.strategy,
        form,
    })
}

/// Run the per-site pipeline for every site in `sites`.
///
/// Each site is bounded by `config.site_timeout_seconds`; a timeout is
/// reported as [`OpenSearchError::Network`] for that site only. The
/// returned outcomes are in the same order as `sites`.
pub async fn discover_forms<F: Fetcher>(
    discoverer: &Discoverer<F>,
    sites: &[String],
    config: &DiscoveryConfig,
) -> Vec<SiteOutcome> {
    let site_timeout = Duration::from_secs(config.site_timeout_seconds);

    stream::iter(sites)
        .map(move |site| async move {
            let result = match tokio::time::timeout(site_timeout, discover_form(discoverer, site)).await
            {
                Ok(result) => result,
                Err(_) => Err(OpenSearchError::Network(format!(
                    "{site} timed out after {}s",
                    site_timeout.as_secs()
                ))),
            };

            match &result {
                Ok(found) => {
                    tracing::info!(site = %site, strategy = %found.strategy, "search form ready");
                }
                Err(err) => {
                    tracing::warn!(site = %site, kind = err.kind(), error = %err, "site failed");
                }
            }

            SiteOutcome {
                site_url: site.clone(),
                result,
            }
        })
        .buffered(config.max_concurrent_sites.max(1))
        .collect()
        .await
}
