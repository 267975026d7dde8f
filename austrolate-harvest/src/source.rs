//! Page sources
//!
//! The `PageSource` trait abstracts over where harvested HTML comes from, so
//! the harvester can run against the live dictionary site or against canned
//! pages in tests.

use crate::error::{HarvestError, HarvestResult};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Something that returns the HTML of a page for a URL
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the page at `url` and return its body
    async fn fetch(&self, url: &str) -> HarvestResult<String>;

    /// Name of this source, used in log messages
    fn source_name(&self) -> &str;
}

/// Fetches pages over HTTP(S)
#[derive(Clone)]
pub struct HttpPageSource {
    client: reqwest::Client,
}

impl HttpPageSource {
    /// Request timeout
    const TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new() -> HarvestResult<Self> {
        Self::with_timeout(Self::TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> HarvestResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("austrolate-harvest/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch(&self, url: &str) -> HarvestResult<String> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    fn source_name(&self) -> &str {
        "HTTP"
    }
}
