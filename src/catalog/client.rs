//! HTTP client for catalog pages using wreq with browser emulation.

use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;
use wreq::Client;
use wreq_util::Emulation;

/// Fetches catalog pages - a trait so tests can substitute canned HTML.
#[async_trait]
pub trait CatalogFetch: Send + Sync {
    /// Fetches a page and returns its body. Single attempt, no retry.
    async fn fetch(&self, url: &str) -> Result<String>;

    /// Base URL the category paths are joined onto.
    fn base_url(&self) -> &str;
}

/// Catalog HTTP client.
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Creates a client for the catalog configured in `config`.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, config.catalog_url.clone())
    }

    /// Creates a client against a custom base URL (for testing).
    pub fn with_base_url(config: &Config, base_url: String) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build catalog HTTP client")?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl CatalogFetch for CatalogClient {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .emulation(Emulation::Chrome131)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header("Accept-Language", "en-GB,en;q=0.9")
            .header("Cache-Control", "no-cache")
            .send()
            .await
            .context("Failed to send request")?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            anyhow::bail!("Catalog request failed with status: {}", status);
        }

        response.text().await.context("Failed to read response body")
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
