//! Error types for repovault

use thiserror::Error;

/// Result type alias for repovault operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for repovault operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Mirror clone failure
    #[error("git clone --mirror {url} failed: {reason}")]
    Clone { url: String, reason: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
