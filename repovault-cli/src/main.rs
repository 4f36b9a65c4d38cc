//! Repovault CLI - Mirror GitHub repositories to local disk
//!
//! Uses the preinstalled `git` and `gh` binaries: `git` needs SSH access to
//! the repositories being mirrored and `gh` must already be logged in.

mod backup;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use repovault_core::{Config, GitCli};
use repovault_github::{GhCli, GhRunner, OwnedRepos, RepoSource, StarredRepos};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use backup::BackupRun;

/// Repovault: mirror a user's or organization's GitHub repositories
#[derive(Parser, Debug)]
#[command(name = "repovault")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Users or organizations to back up (comma separated)
    #[arg(long, value_delimiter = ',')]
    users: Vec<String>,

    /// Only back up these owner/repo names (comma separated, all if empty)
    #[arg(long, value_delimiter = ',')]
    limit: Vec<String>,

    /// Local folder to save mirrors into (overrides config)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Maximum number of owned repositories listed per account
    #[arg(long = "maxrepo")]
    max_repos: Option<u32>,

    /// Also enumerate starred repositories
    #[arg(long)]
    stars: bool,

    /// Enumerate starred repositories only, skip owned ones
    #[arg(long = "starsonly")]
    stars_only: bool,

    /// Print the selected repositories without cloning
    #[arg(long = "printonly")]
    print_only: bool,

    /// Path to the git executable (overrides config and env)
    #[arg(long, env = "REPOVAULT_GIT_PATH")]
    git_path: Option<String>,

    /// Path to the gh executable (overrides config and env)
    #[arg(long, env = "REPOVAULT_GH_PATH")]
    gh_path: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Trim comma-list entries and drop the empty ones.
///
/// `--limit ""` parses to `[""]`, which must mean "no allow-list" rather
/// than an allow-list nothing matches; the same cleanup applies to `--users`.
fn clean_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Load configuration with overrides
    let config = Config::load_with_overrides(
        cli.output.clone(),
        cli.max_repos,
        cli.git_path.clone(),
        cli.gh_path.clone(),
    )?;

    if cli.verbose {
        tracing::info!(
            output = %config.backup.output.display(),
            max_repos = config.backup.max_repos,
            git_path = %config.git.git_path,
            gh_path = %config.github.gh_path,
            "Configuration loaded"
        );
    }

    let users = clean_list(&cli.users);
    let limit = clean_list(&cli.limit);

    if users.is_empty() {
        tracing::warn!("no users given, nothing to do");
        return Ok(());
    }

    let runner: Arc<dyn GhRunner> = Arc::new(GhCli::new().with_path(config.github.gh_path.clone()));

    let mut sources: Vec<Arc<dyn RepoSource>> = Vec::new();
    if !cli.stars_only {
        sources.push(Arc::new(OwnedRepos::new(
            runner.clone(),
            config.backup.max_repos,
        )));
    }
    if cli.stars || cli.stars_only {
        sources.push(Arc::new(StarredRepos::new(runner)));
    }

    let git = Arc::new(GitCli::new().with_path(config.git.git_path.clone()));
    let run = BackupRun::new(sources, git, limit, cli.print_only);
    let report = run.run(&users, &config.backup.output).await?;

    tracing::info!(
        listed = report.listed.len(),
        cloned = report.cloned.len(),
        "backup finished"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_limit_flag_means_no_allow_list() {
        let cli = Cli::try_parse_from(["repovault", "--users", "acme", "--limit", ""]).unwrap();

        // clap parses the explicit empty value to a one-element list
        assert_eq!(cli.limit, vec![""]);
        // which must clean down to "back up everything"
        assert!(clean_list(&cli.limit).is_empty());
    }

    #[test]
    fn test_comma_lists_trim_and_drop_empty_segments() {
        let cli = Cli::try_parse_from([
            "repovault",
            "--users",
            " acme ,, globex",
            "--limit",
            "acme/foo,,",
        ])
        .unwrap();

        assert_eq!(clean_list(&cli.users), vec!["acme", "globex"]);
        assert_eq!(clean_list(&cli.limit), vec!["acme/foo"]);
    }

    #[test]
    fn test_no_flags_parse_to_empty_lists() {
        let cli = Cli::try_parse_from(["repovault"]).unwrap();
        assert!(clean_list(&cli.users).is_empty());
        assert!(clean_list(&cli.limit).is_empty());
    }
}
