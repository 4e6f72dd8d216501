//! CLI binary: render a search portal page from a TOML site list.
//!
//! All tracing output goes to stderr so that stdout carries only the page
//! (or JSON report).

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use search_portal::page::render_page;
use search_portal::report::outcomes_to_json;
use search_portal::{PortalConfig, discover_sites, successful_forms};
use tracing_subscriber::EnvFilter;

/// Build a page of search forms from the OpenSearch descriptions of
/// configured sites.
#[derive(Parser)]
#[command(name = "search-portal", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    config: PathBuf,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Per-request timeout in seconds, overriding the configuration.
    #[arg(long)]
    timeout: Option<u64>,
}

/// Output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    /// Standalone HTML page with one form per site.
    #[default]
    Html,
    /// Per-site outcomes as JSON.
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("search_portal=info,opensearch_discovery=info")
        }))
        .init();

    let cli = Cli::parse();

    let mut config = PortalConfig::from_file(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(timeout) = cli.timeout {
        config.discovery.timeout_seconds = timeout;
        config.discovery.site_timeout_seconds =
            config.discovery.site_timeout_seconds.max(timeout);
        config.validate()?;
    }

    let outcomes = discover_sites(&config).await?;
    let forms = successful_forms(&outcomes);
    let failed = outcomes.len() - forms.len();
    tracing::info!(ok = forms.len(), failed, "discovery finished");

    let rendered = match cli.format {
        OutputFormat::Html => render_page(&config.title, &forms)?,
        OutputFormat::Json => outcomes_to_json(&outcomes)?,
    };

    match cli.output {
        Some(ref path) => std::fs::write(path, &rendered)
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{rendered}"),
    }

    if forms.is_empty() {
        anyhow::bail!("no search form could be built for any of the {failed} configured sites");
    }

    Ok(())
}
