//! HTTP client for Amazon searches using wreq for TLS fingerprint emulation.

use crate::amazon::request::SearchRequest;
use crate::config::Config;
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use wreq::Client;
use wreq_util::Emulation;

/// Why a search page could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS, connect, TLS or timeout failure.
    #[error("Failed to send request: {0}")]
    Transport(#[source] wreq::Error),

    #[error("Rate limited by Amazon (503)")]
    RateLimited,

    #[error("Request failed with status: {0}")]
    Status(u16),

    #[error("Failed to read response body: {0}")]
    Body(#[source] wreq::Error),
}

/// Trait for fetching search pages - enables mocking for tests.
#[async_trait]
pub trait AmazonSearch: Send + Sync {
    /// Performs one GET and returns the HTML body.
    async fn fetch(&self, request: &SearchRequest) -> Result<String, FetchError>;
}

/// Amazon HTTP client with browser impersonation.
pub struct AmazonClient {
    client: Client,
    timeout: Duration,
    /// Domain a response is expected to come from; `None` when a custom base URL is set.
    expected_domain: Option<&'static str>,
}

impl AmazonClient {
    /// Creates a new client with the configured timeout.
    pub fn new(config: &Config) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);

        let client = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(timeout)
            .build()?;

        let expected_domain = match config.base_url {
            Some(_) => None,
            None => Some(config.region.domain()),
        };

        Ok(Self { client, timeout, expected_domain })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl AmazonSearch for AmazonClient {
    async fn fetch(&self, request: &SearchRequest) -> Result<String, FetchError> {
        debug!("GET {}", request.url);

        let mut builder = self.client.get(&request.url).emulation(Emulation::Chrome131);
        for (name, value) in &request.headers {
            builder = builder.header(*name, *value);
        }

        let response = builder.send().await.map_err(FetchError::Transport)?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status == 503 {
            warn!("Rate limited (503). Amazon is throttling this client.");
            return Err(FetchError::RateLimited);
        }

        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let final_url = response.uri().to_string();
        if let Some(domain) = self.expected_domain {
            if !final_url.contains(domain) {
                warn!(
                    "Redirected to different domain: {}. Your IP may be associated with a different region.",
                    final_url
                );
            }
        }

        response.text().await.map_err(FetchError::Body)
    }
}
