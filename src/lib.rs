//! Serv-U version spider
//!
//! This crate fetches a Web Archive snapshot of the Serv-U release-notes
//! page, extracts the version numbers embedded in its markup, and writes
//! them to a local text file, one per line.

pub mod decode;
pub mod output;
pub mod retry;
pub mod spider;

use thiserror::Error;

/// Main error type for spider operations
#[derive(Debug, Error)]
pub enum SpiderError {
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for spider operations
pub type Result<T> = std::result::Result<T, SpiderError>;

// Re-export commonly used types
pub use decode::{decode_page, DEFAULT_CHARSETS};
pub use retry::RetryPolicy;
pub use spider::{extract_versions, fetch_page, run};
