use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading dictionaries or reading configuration
#[derive(Debug, Error)]
pub enum AustrolateError {
    /// Dictionary file could not be read
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Dictionary file is not valid JSON
    #[error("failed to parse JSON from '{origin}': {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    /// Dictionary JSON is valid but not an object
    #[error("invalid dictionary in '{0}': root must be an object")]
    InvalidRoot(String),
    /// Unknown translation direction name
    #[error("unknown direction '{0}' (expected to-viennese or to-standard)")]
    InvalidDirection(String),
    /// A configuration value could not be parsed
    #[error("invalid value for {key}: {message}")]
    InvalidConfig { key: String, message: String },
}

/// Result type for dictionary loading and configuration
pub type Result<T> = std::result::Result<T, AustrolateError>;
