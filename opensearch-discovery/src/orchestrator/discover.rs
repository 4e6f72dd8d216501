//! Per-site discovery: homepage link first, the URL itself as fallback.
//!
//! A configured URL may name either a human-facing homepage or the
//! description document itself. The linked strategy is tried first; any
//! failure there is kept on the result and the direct strategy runs. Only
//! when both fail does the site fail, with the direct strategy's error as
//! the cause.

use url::Url;

use crate::config::DiscoveryConfig;
use crate::description::parse_description;
use crate::error::OpenSearchError;
use crate::http::{Fetcher, HttpFetcher};
use crate::link::extract_search_link;
use crate::types::{DiscoveryStrategy, OpenSearchDescription};

/// A successfully discovered description and how it was found.
#[derive(Debug)]
pub struct Discovered {
    /// The site URL as configured.
    pub site_url: String,
    /// Where the description bytes were read from.
    pub description_url: Url,
    /// Which strategy produced the description.
    pub strategy: DiscoveryStrategy,
    /// The raw description document.
    pub raw: Vec<u8>,
    /// The parsed description.
    pub description: OpenSearchDescription,
    /// Why the linked strategy failed, when the direct one was used.
    pub primary_failure: Option<OpenSearchError>,
}

/// Runs the two-tier discovery over a [`Fetcher`].
#[derive(Debug, Clone)]
pub struct Discoverer<F> {
    fetcher: F,
}

impl Discoverer<HttpFetcher> {
    /// Build a discoverer backed by real HTTP clients.
    ///
    /// # Errors
    ///
    /// Returns [`OpenSearchError::Config`] for an invalid configuration, or
    /// [`OpenSearchError::Network`] if the HTTP clients cannot be built.
    pub fn from_config(config: &DiscoveryConfig) -> Result<Self, OpenSearchError> {
        config.validate()?;
        Ok(Self::new(HttpFetcher::new(config)?))
    }
}

impl<F: Fetcher> Discoverer<F> {
    /// Build a discoverer over any [`Fetcher`].
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// The underlying fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch `site_url` as a homepage (following redirects) and return the
    /// absolute URL of its `<link rel="search">` target.
    ///
    /// # Errors
    ///
    /// [`OpenSearchError::Network`] if the page cannot be fetched, or
    /// [`OpenSearchError::NotFound`] if it declares no search link.
    pub async fn find_search_link(&self, site_url: &Url) -> Result<Url, OpenSearchError> {
        let page = self.fetcher.fetch(site_url.as_str(), true).await?;
        let html = String::from_utf8_lossy(&page.body);
        extract_search_link(&html, site_url)
    }

    /// Discover the OpenSearch description for `site_url`.
    ///
    /// # Errors
    ///
    /// Returns [`OpenSearchError::Discovery`] naming `site_url` when neither
    /// strategy yields a parseable description.
    pub async fn discover(&self, site_url: &str) -> Result<Discovered, OpenSearchError> {
        let parsed = Url::parse(site_url).map_err(|e| OpenSearchError::Discovery {
            site_url: site_url.to_string(),
            source: Box::new(OpenSearchError::Parse(format!("invalid site URL: {e}"))),
        })?;

        let primary_failure = match self.linked(&parsed).await {
            Ok((description_url, raw, description)) => {
                tracing::debug!(site = site_url, %description_url, "description found via search link");
                return Ok(Discovered {
                    site_url: site_url.to_string(),
                    description_url,
                    strategy: DiscoveryStrategy::Linked,
                    raw,
                    description,
                    primary_failure: None,
                });
            }
            Err(err) => err,
        };

        tracing::warn!(
            site = site_url,
            kind = primary_failure.kind(),
            error = %primary_failure,
            "search link discovery failed, fetching site URL as description"
        );

        match self.direct(&parsed).await {
            Ok((raw, description)) => Ok(Discovered {
                site_url: site_url.to_string(),
                description_url: parsed,
                strategy: DiscoveryStrategy::Direct,
                raw,
                description,
                primary_failure: Some(primary_failure),
            }),
            Err(err) => Err(OpenSearchError::Discovery {
                site_url: site_url.to_string(),
                source: Box::new(err),
            }),
        }
    }

    async fn linked(
        &self,
        site_url: &Url,
    ) -> Result<(Url, Vec<u8>, OpenSearchDescription), OpenSearchError> {
        let description_url = self.find_search_link(site_url).await?;
        let response = self.fetcher.fetch(description_url.as_str(), false).await?;
        let description = parse_description(&response.body)?;
        Ok((description_url, response.body, description))
    }

    async fn direct(
        &self,
        site_url: &Url,
    ) -> Result<(Vec<u8>, OpenSearchDescription), OpenSearchError> {
        let response = self.fetcher.fetch(site_url.as_str(), false).await?;
        let description = parse_description(&response.body)?;
        Ok((response.body, description))
    }
}
