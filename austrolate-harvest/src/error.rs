use thiserror::Error;

/// Error types for harvesting phrase pairs
#[derive(Debug, Error)]
pub enum HarvestError {
    /// HTTP request failed before a response arrived
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    /// A page link could not be resolved
    #[error("invalid URL '{url}': {message}")]
    Url { url: String, message: String },
    /// A table id produced an unusable pattern
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// Writing the dictionary file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serializing the dictionary failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A page source could not provide a page
    #[error("page source error: {0}")]
    Source(String),
}

/// Result type for harvest operations
pub type HarvestResult<T> = Result<T, HarvestError>;
