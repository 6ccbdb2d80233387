//! HTTP fetching for the crawler module
//!
//! Issues a single GET per page. Redirects are not followed and requests are
//! not retried. When `accept_invalid_certs` is set, neither the server
//! certificate nor the hostname is verified: this is an explicit insecure
//! mode suitable only for best-effort indexing.

use reqwest::header::USER_AGENT;
use reqwest::{redirect, Client};
use tracing::{debug, instrument};
use url::Url;

use crate::crawler::error::{CrawlError, FetchError};
use crate::crawler::CrawlerConfig;

/// Retrieves raw page content over HTTP
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with the timeout and TLS policy from `config`
    pub fn new(config: &CrawlerConfig) -> Result<Self, CrawlError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(redirect::Policy::none())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .danger_accept_invalid_hostnames(config.accept_invalid_certs)
            .build()
            .map_err(CrawlError::Client)?;

        Ok(Self { client })
    }

    /// Fetch the body of `url` as text
    ///
    /// Every failure is returned as a `FetchError`; nothing is retried.
    #[instrument(skip(self))]
    pub async fn fetch(&self, url: &str, user_agent: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self
            .client
            .get(parsed)
            .header(USER_AGENT, user_agent)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
