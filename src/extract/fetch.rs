//! HTTP page fetching with a bounded timeout.

use crate::error::ExtractError;
use crate::utils::parse_http_url;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

/// User-Agent sent by the fallback strategy.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

/// User-Agent sent by the primary strategy.
pub const CRATE_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Something that can turn a URL into an HTML document.
pub trait PageFetcher {
    /// Fetch the body of `url` as text.
    async fn fetch(&self, url: &str) -> Result<String, ExtractError>;
}

/// [`PageFetcher`] backed by a `reqwest` client.
///
/// Every request is bounded by the client timeout, so a hung server is
/// reported as a [`ExtractError::Fetch`] instead of stalling the run.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl PageFetcher for HttpFetcher {
    #[instrument(level = "debug", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, ExtractError> {
        let parsed = parse_http_url(url)?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| ExtractError::Fetch {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| ExtractError::Fetch {
            url: url.to_string(),
            source: e,
        })?;
        debug!(bytes = body.len(), "Fetched page");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_user_agent() {
        assert!(CRATE_USER_AGENT.starts_with("bias_aware_news/"));
    }

    #[tokio::test]
    async fn test_rejects_non_http_urls_without_network() {
        let fetcher = HttpFetcher::new(BROWSER_USER_AGENT, DEFAULT_TIMEOUT).unwrap();

        let err = fetcher.fetch("ftp://example.com/file").await.unwrap_err();
        assert!(matches!(err, ExtractError::Parse { .. }));

        let err = fetcher.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, ExtractError::Parse { .. }));
    }
}
