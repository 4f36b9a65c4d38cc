//! The backup pipeline: list, filter, mirror

use std::path::Path;
use std::sync::Arc;

use repovault_core::{filter, MirrorGit, RepoName};
use repovault_github::{Error as GithubError, RepoSource};
use tracing::{debug, warn};

/// What a run touched, in processing order.
///
/// `listed` holds every repository that passed the filter together with its
/// printed ordinal; numbering runs continuously across accounts. `cloned`
/// holds the names actually mirrored, where a cloned wiki appears as
/// `{name}.wiki` right after its repository; a repository whose main clone
/// failed never appears at all, because that failure aborts the run.
#[derive(Debug, Default)]
pub struct BackupReport {
    pub listed: Vec<(u32, String)>,
    pub cloned: Vec<String>,
}

/// Sequential backup driver.
///
/// Owns the progress counter so numbering stays continuous across accounts
/// without any ambient state. One account at a time, one repository at a
/// time, one external process at a time.
pub struct BackupRun {
    sources: Vec<Arc<dyn RepoSource>>,
    git: Arc<dyn MirrorGit>,
    allow: Vec<String>,
    print_only: bool,
    counter: u32,
    report: BackupReport,
}

impl BackupRun {
    pub fn new(
        sources: Vec<Arc<dyn RepoSource>>,
        git: Arc<dyn MirrorGit>,
        allow: Vec<String>,
        print_only: bool,
    ) -> Self {
        Self {
            sources,
            git,
            allow,
            print_only,
            counter: 0,
            report: BackupReport::default(),
        }
    }

    /// Process every account in order.
    ///
    /// The first fatal error (listing transport, main clone) stops the whole
    /// run; remaining accounts are not touched.
    pub async fn run(mut self, accounts: &[String], output: &Path) -> anyhow::Result<BackupReport> {
        for account in accounts {
            self.run_account(account, output).await?;
        }
        Ok(self.report)
    }

    async fn run_account(&mut self, account: &str, output: &Path) -> anyhow::Result<()> {
        let mut names: Vec<RepoName> = Vec::new();
        for source in &self.sources {
            match source.list(account).await {
                Ok(batch) => names.extend(batch),
                // A malformed listing body abandons this account but leaves
                // the rest of the run alive. Failed gh invocations stay fatal.
                Err(GithubError::Parse { reason, .. }) => {
                    warn!(
                        account,
                        source = source.name(),
                        reason = %reason,
                        "unexpected listing payload, skipping account"
                    );
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            }
        }

        let selected = filter::apply(names, &self.allow);
        debug!(account, count = selected.len(), "repositories selected");

        for name in selected {
            self.counter += 1;
            println!("repo {:3}: {}", self.counter, name);
            self.report.listed.push((self.counter, name.to_string()));

            if self.print_only {
                continue;
            }

            self.mirror_one(&name, output)?;
        }

        Ok(())
    }

    fn mirror_one(&mut self, name: &RepoName, output: &Path) -> anyhow::Result<()> {
        self.git.mirror(&name.ssh_url(), &name.mirror_dir(output))?;
        self.report.cloned.push(name.to_string());

        // Best-effort: most repositories have no wiki
        match self
            .git
            .mirror(&name.wiki_ssh_url(), &name.wiki_mirror_dir(output))
        {
            Ok(()) => self.report.cloned.push(name.wiki_name()),
            Err(e) => debug!(repo = %name, error = %e, "wiki clone skipped"),
        }

        Ok(())
    }
}
