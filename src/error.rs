//! Error types for the search portal.

use opensearch_discovery::OpenSearchError;

/// Top-level error type for building a portal page.
#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// Invalid or unreadable configuration.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Page or report rendering error.
    #[error("render error: {0}")]
    Render(String),

    /// Discovery could not run at all (per-site failures are reported
    /// separately).
    #[error(transparent)]
    Discovery(#[from] OpenSearchError),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, PortalError>;
