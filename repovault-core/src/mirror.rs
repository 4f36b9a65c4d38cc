//! Mirror cloning through the git binary

use std::path::Path;
use std::process::Command;

use crate::{Error, Result};

/// Seam over `git clone --mirror` so the backup driver can be exercised
/// without spawning processes.
pub trait MirrorGit: Send + Sync {
    /// Mirror the repository at `url` into the bare directory `dest`.
    fn mirror(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Runs the real `git` binary.
///
/// `git` must be configured with SSH access to the repositories being
/// mirrored. Re-running against an existing mirror directory is delegated
/// to git's own semantics.
#[derive(Debug, Clone)]
pub struct GitCli {
    git_path: String,
}

impl GitCli {
    /// Create a cloner using `git` from PATH
    pub fn new() -> Self {
        Self {
            git_path: "git".to_string(),
        }
    }

    /// Use a specific git executable
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.git_path = path.into();
        self
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl MirrorGit for GitCli {
    fn mirror(&self, url: &str, dest: &Path) -> Result<()> {
        tracing::debug!(url, dest = %dest.display(), "running git clone --mirror");

        let output = Command::new(&self.git_path)
            .arg("clone")
            .arg("--mirror")
            .arg(url)
            .arg(dest)
            .output()
            .map_err(|e| Error::Other(format!("Failed to run git clone: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Clone {
                url: url.to_string(),
                reason: classify_clone_failure(&stderr),
            });
        }

        Ok(())
    }
}

/// Map git's stderr onto a short reason for the common failure modes.
fn classify_clone_failure(stderr: &str) -> String {
    if stderr.contains("Authentication failed") || stderr.contains("Permission denied") {
        return "authentication failed, check your SSH access".to_string();
    }

    if stderr.contains("Could not resolve host") || stderr.contains("unable to access") {
        return "network error, check your internet connection".to_string();
    }

    if stderr.contains("not found") || stderr.contains("does not exist") {
        return "repository not found".to_string();
    }

    stderr.trim().to_string()
}
