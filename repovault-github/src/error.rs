//! Error types for repository discovery

use thiserror::Error;

/// Result type for repository discovery operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while listing repositories through gh
#[derive(Error, Debug)]
pub enum Error {
    /// The gh binary could not be spawned
    #[error("failed to run gh: {0}")]
    Io(#[from] std::io::Error),

    /// gh exited with a failure status
    #[error("gh {args} failed: {stderr}")]
    Gh { args: String, stderr: String },

    /// A listing body did not match the expected shape
    #[error("unexpected starred listing for {account}: {reason}")]
    Parse { account: String, reason: String },
}
