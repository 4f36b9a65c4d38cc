//! gh CLI invocation

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::{Error, Result};

/// Seam over "run gh and collect its stdout".
///
/// Discovery sources only ever need this one operation; tests substitute a
/// fake runner with canned output.
#[async_trait]
pub trait GhRunner: Send + Sync {
    /// Run gh with the given arguments and return its stdout on success.
    ///
    /// A spawn failure or a non-zero exit status is an error; there is no
    /// retry, the caller decides what a failed invocation means.
    async fn run(&self, args: &[String]) -> Result<Vec<u8>>;
}

/// Runs the real `gh` binary, which must already be logged in.
#[derive(Debug, Clone)]
pub struct GhCli {
    gh_path: String,
}

impl GhCli {
    /// Create a runner using `gh` from PATH
    pub fn new() -> Self {
        Self {
            gh_path: "gh".to_string(),
        }
    }

    /// Use a specific gh executable
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.gh_path = path.into();
        self
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GhRunner for GhCli {
    async fn run(&self, args: &[String]) -> Result<Vec<u8>> {
        debug!(gh = %self.gh_path, ?args, "running gh");

        let output = Command::new(&self.gh_path).args(args).output().await?;

        if !output.status.success() {
            return Err(Error::Gh {
                args: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}
