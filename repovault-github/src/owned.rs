//! Owned-repository listing via `gh repo list`

use std::sync::Arc;

use async_trait::async_trait;
use repovault_core::RepoName;
use tracing::debug;

use crate::{GhRunner, RepoSource, Result};

/// Lists the repositories an account owns.
pub struct OwnedRepos {
    runner: Arc<dyn GhRunner>,
    max_repos: u32,
}

impl OwnedRepos {
    /// Create an owned-repository source capped at `max_repos` per account
    pub fn new(runner: Arc<dyn GhRunner>, max_repos: u32) -> Self {
        Self { runner, max_repos }
    }
}

#[async_trait]
impl RepoSource for OwnedRepos {
    fn name(&self) -> &'static str {
        "owned"
    }

    async fn list(&self, account: &str) -> Result<Vec<RepoName>> {
        let args = vec![
            "repo".to_string(),
            "list".to_string(),
            account.to_string(),
            "-L".to_string(),
            self.max_repos.to_string(),
        ];

        let stdout = self.runner.run(&args).await?;
        let names = parse_repo_list(&stdout);
        debug!(account, count = names.len(), "listed owned repositories");

        Ok(names)
    }
}

/// The first tab-separated column of each non-empty line is the name.
fn parse_repo_list(stdout: &[u8]) -> Vec<RepoName> {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| !line.is_empty())
        .filter_map(|line| line.split('\t').next())
        .map(RepoName::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_column() {
        let out = b"acme/foo\tpublic\nacme/bar\tprivate\n";
        let names = parse_repo_list(out);
        assert_eq!(names, vec![RepoName::new("acme/foo"), RepoName::new("acme/bar")]);
    }

    #[test]
    fn test_parse_skips_empty_lines() {
        let out = b"acme/foo\tpublic\n\nacme/bar\tprivate\n\n";
        let names = parse_repo_list(out);
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_parse_empty_output() {
        assert!(parse_repo_list(b"").is_empty());
    }

    #[test]
    fn test_parse_line_without_tabs() {
        let names = parse_repo_list(b"acme/foo\n");
        assert_eq!(names, vec![RepoName::new("acme/foo")]);
    }
}
