//! HTTP fetching for discovery.
//!
//! [`Fetcher`] is the network capability the orchestrator depends on; it is
//! a trait so tests can substitute an in-memory implementation.
//! [`HttpFetcher`] is the real implementation on top of [`reqwest::Client`].

use std::future::Future;
use std::time::Duration;

use crate::config::DiscoveryConfig;
use crate::error::OpenSearchError;

/// User-Agent sent when the configuration does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!("search-portal/", env!("CARGO_PKG_VERSION"));

/// A successful (2xx) response.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

/// Network fetch capability.
///
/// Implementations must fail with [`OpenSearchError::Network`] on connection
/// failure, timeout, or any non-2xx status, so callers only ever see bodies
/// of successful responses.
pub trait Fetcher: Send + Sync {
    /// Fetch `url`, following redirects only when `follow_redirects` is set.
    fn fetch(
        &self,
        url: &str,
        follow_redirects: bool,
    ) -> impl Future<Output = Result<FetchResponse, OpenSearchError>> + Send;
}

/// [`Fetcher`] backed by two `reqwest` clients: one that follows redirects
/// and one that does not.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    following: reqwest::Client,
    direct: reqwest::Client,
}

impl HttpFetcher {
    /// Build both clients from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`OpenSearchError::Network`] if a client cannot be constructed.
    pub fn new(config: &DiscoveryConfig) -> Result<Self, OpenSearchError> {
        Ok(Self {
            following: build_client(
                config,
                reqwest::redirect::Policy::limited(config.max_redirects),
            )?,
            direct: build_client(config, reqwest::redirect::Policy::none())?,
        })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(
        &self,
        url: &str,
        follow_redirects: bool,
    ) -> Result<FetchResponse, OpenSearchError> {
        let client = if follow_redirects {
            &self.following
        } else {
            &self.direct
        };

        tracing::debug!(url, follow_redirects, "fetching");

        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| OpenSearchError::Network(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(OpenSearchError::Network(format!(
                "{url} returned status {status}"
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| OpenSearchError::Network(format!("reading {url} failed: {e}")))?;

        tracing::trace!(url, bytes = body.len(), "response received");

        Ok(FetchResponse {
            status: status.as_u16(),
            body: body.to_vec(),
        })
    }
}

/// Build a [`reqwest::Client`] with the configured timeout and User-Agent.
///
/// # Errors
///
/// Returns [`OpenSearchError::Network`] if the client cannot be constructed.
pub fn build_client(
    config: &DiscoveryConfig,
    redirect: reqwest::redirect::Policy,
) -> Result<reqwest::Client, OpenSearchError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(redirect)
        .build()
        .map_err(|e| OpenSearchError::Network(format!("failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher() -> HttpFetcher {
        HttpFetcher::new(&DiscoveryConfig::default()).expect("client builds")
    }

    #[test]
    fn default_user_agent_names_the_tool() {
        assert!(DEFAULT_USER_AGENT.starts_with("search-portal/"));
    }

    #[test]
    fn build_client_with_custom_ua() {
        let config = DiscoveryConfig {
            user_agent: Some("PortalBot/1.0".into()),
            ..Default::default()
        };
        assert!(build_client(&config, reqwest::redirect::Policy::none()).is_ok());
    }

    #[tokio::test]
    async fn fetch_returns_body_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/osd.xml"))
            .and(header("user-agent", DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("<xml/>"))
            .expect(1)
            .mount(&server)
            .await;

        let response = fetcher()
            .fetch(&format!("{}/osd.xml", server.uri()), false)
            .await
            .expect("fetch succeeds");
        assert_eq!(response.status, 200);
        assert_eq!(response.body, b"<xml/>");
    }

    #[tokio::test]
    async fn non_success_status_is_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = fetcher()
            .fetch(&format!("{}/missing", server.uri()), true)
            .await
            .unwrap_err();
        assert!(matches!(err, OpenSearchError::Network(_)));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn redirects_followed_only_on_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/old"))
            .respond_with(
                ResponseTemplate::new(301).insert_header("location", "/new"),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moved here"))
            .mount(&server)
            .await;

        let url = format!("{}/old", server.uri());
        let followed = fetcher().fetch(&url, true).await.expect("redirect followed");
        assert_eq!(followed.body, b"moved here");

        let direct = fetcher().fetch(&url, false).await;
        assert!(matches!(direct, Err(OpenSearchError::Network(_))));
    }

    #[tokio::test]
    async fn connection_failure_is_network_error() {
        // Port 9 (discard) is not listening on loopback in test environments.
        let err = fetcher()
            .fetch("http://127.0.0.1:9/", false)
            .await
            .unwrap_err();
        assert!(matches!(err, OpenSearchError::Network(_)));
    }
}
