//! Discovery configuration with sensible defaults.
//!
//! [`DiscoveryConfig`] controls fetch timeouts, redirect limits, and how many
//! sites are processed at once. It deserializes from a TOML/JSON table where
//! every field is optional.

use serde::Deserialize;

use crate::error::OpenSearchError;

/// Configuration for a discovery run.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Upper bound in seconds for one site's whole pipeline (homepage,
    /// description, and fallback fetches together).
    pub site_timeout_seconds: u64,
    /// Maximum redirects followed when fetching a homepage.
    pub max_redirects: usize,
    /// How many sites are discovered concurrently.
    pub max_concurrent_sites: usize,
    /// Custom User-Agent string. If `None`, a `search-portal/<version>`
    /// agent is sent.
    pub user_agent: Option<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            site_timeout_seconds: 30,
            max_redirects: 10,
            max_concurrent_sites: 8,
            user_agent: None,
        }
    }
}

impl DiscoveryConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `timeout_seconds` must be greater than 0
    /// - `site_timeout_seconds` must be >= `timeout_seconds`
    /// - `max_concurrent_sites` must be greater than 0
    pub fn validate(&self) -> Result<(), OpenSearchError> {
        if self.timeout_seconds == 0 {
            return Err(OpenSearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.site_timeout_seconds < self.timeout_seconds {
            return Err(OpenSearchError::Config(
                "site_timeout_seconds must be >= timeout_seconds".into(),
            ));
        }
        if self.max_concurrent_sites == 0 {
            return Err(OpenSearchError::Config(
                "max_concurrent_sites must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
