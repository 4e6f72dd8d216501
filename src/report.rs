//! Machine-readable per-site report.

use opensearch_discovery::{DiscoveryStrategy, FormDescriptor, SiteOutcome};
use serde::Serialize;

use crate::error::{PortalError, Result};

#[derive(Debug, Serialize)]
struct SiteReport<'a> {
    site_url: &'a str,
    #[serde(flatten)]
    outcome: ReportOutcome<'a>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum ReportOutcome<'a> {
    Ok {
        description_url: &'a str,
        strategy: DiscoveryStrategy,
        form: &'a FormDescriptor,
    },
    Error {
        kind: &'static str,
        message: String,
    },
}

/// Serialize per-site outcomes as a pretty JSON array, in input order.
///
/// # Errors
///
/// Returns [`PortalError::Render`] if serialization fails.
pub fn outcomes_to_json(outcomes: &[SiteOutcome]) -> Result<String> {
    let reports: Vec<SiteReport<'_>> = outcomes
        .iter()
        .map(|outcome| SiteReport {
            site_url: &outcome.site_url,
            outcome: match &outcome.result {
                Ok(found) => ReportOutcome::Ok {
                    description_url: &found.description_url,
                    strategy: found.strategy,
                    form: &found.form,
                },
                Err(err) => ReportOutcome::Error {
                    kind: err.kind(),
                    message: err.to_string(),
                },
            },
        })
        .collect();

    serde_json::to_string_pretty(&reports).map_err(|e| PortalError::Render(e.to_string()))
}
