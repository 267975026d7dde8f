//! Canned page source for testing
//!
//! Serves fixed HTML per URL so the harvester can be exercised without
//! network access.
//!
//! # Example
//!
//! ```
//! use austrolate_harvest::{PageSource, StaticPageSource};
//!
//! let source = StaticPageSource::new().with_page("https://example.org/", "<html></html>");
//! assert_eq!(source.page_count(), 1);
//! assert_eq!(source.source_name(), "Static Pages");
//! ```

use crate::error::{HarvestError, HarvestResult};
use crate::source::PageSource;
use async_trait::async_trait;
use std::collections::HashMap;

/// Page source backed by an in-memory URL → HTML map
#[derive(Debug, Clone, Default)]
pub struct StaticPageSource {
    pages: HashMap<String, String>,
}

impl StaticPageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[async_trait]
impl PageSource for StaticPageSource {
    async fn fetch(&self, url: &str) -> HarvestResult<String> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| HarvestError::Source(format!("no page for {}", url)))
    }

    fn source_name(&self) -> &str {
        "Static Pages"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_known_page() {
        let source = StaticPageSource::new().with_page("https://a.test/", "<p>hi</p>");
        assert_eq!(source.fetch("https://a.test/").await.unwrap(), "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_fetch_unknown_page_fails() {
        let source = StaticPageSource::new();
        match source.fetch("https://missing.test/").await {
            Err(HarvestError::Source(msg)) => assert!(msg.contains("missing.test")),
            other => panic!("Expected Source error, got {:?}", other.map(|_| ())),
        }
    }
}
