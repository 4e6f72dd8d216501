//! Portal configuration loaded from TOML.
//!
//! ```toml
//! title = "Search"
//! search = [
//!     "https://eu.wikipedia.org",
//!     "https://example.org/opensearch.xml",
//! ]
//!
//! [discovery]
//! timeout_seconds = 10
//! ```

use std::path::Path;

use opensearch_discovery::DiscoveryConfig;
use serde::Deserialize;

use crate::error::{PortalError, Result};

fn default_title() -> String {
    "Search".to_string()
}

/// Top-level portal configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PortalConfig {
    /// Page title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Site homepages or description URLs, in page order.
    pub search: Vec<String>,
    /// Network and concurrency settings for discovery.
    #[serde(default)]
    pub discovery: DiscoveryConfig,
}

impl PortalConfig {
    /// Load and validate configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// fails validation.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Config`] if the TOML is invalid or fails
    /// validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| PortalError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that at least one site is configured and the discovery
    /// settings are valid.
    pub fn validate(&self) -> Result<()> {
        if self.search.is_empty() {
            return Err(PortalError::Config("search list is empty".into()));
        }
        if let Some(blank) = self.search.iter().position(|s| s.trim().is_empty()) {
            return Err(PortalError::Config(format!("search entry {blank} is blank")));
        }
        self.discovery
            .validate()
            .map_err(|e| PortalError::Config(e.to_string()))
    }
}
