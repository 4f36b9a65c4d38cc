//! Configuration management for repovault
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (REPOVAULT_*)
//! 3. Config file (~/.config/repovault/config.toml)
//! 4. Default values

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Backup-related configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct BackupConfig {
    /// Local folder the mirrors are saved into
    pub output: PathBuf,

    /// Maximum number of owned repositories requested per account
    pub max_repos: u32,
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("repos"),
            max_repos: 1000,
        }
    }
}

/// Git configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GitConfig {
    /// Path to the git executable
    pub git_path: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            git_path: "git".to_string(),
        }
    }
}

/// GitHub CLI configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Path to the gh executable
    pub gh_path: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            gh_path: "gh".to_string(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Backup configuration
    pub backup: BackupConfig,

    /// Git configuration
    pub git: GitConfig,

    /// GitHub CLI configuration
    pub github: GithubConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/repovault/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("repovault").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - REPOVAULT_OUTPUT: Local folder the mirrors are saved into
    /// - REPOVAULT_MAX_REPOS: Maximum number of owned repositories per account
    /// - REPOVAULT_GIT_PATH: Path to the git executable
    /// - REPOVAULT_GH_PATH: Path to the gh executable
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(output) = std::env::var("REPOVAULT_OUTPUT") {
            self.backup.output = PathBuf::from(output);
        }

        if let Ok(max_repos) = std::env::var("REPOVAULT_MAX_REPOS") {
            if let Ok(n) = max_repos.parse() {
                self.backup.max_repos = n;
            }
        }

        if let Ok(git_path) = std::env::var("REPOVAULT_GIT_PATH") {
            self.git.git_path = git_path;
        }

        if let Ok(gh_path) = std::env::var("REPOVAULT_GH_PATH") {
            self.github.gh_path = gh_path;
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        output: Option<PathBuf>,
        max_repos: Option<u32>,
        git_path: Option<String>,
        gh_path: Option<String>,
    ) -> Self {
        if let Some(output) = output {
            self.backup.output = output;
        }

        if let Some(n) = max_repos {
            self.backup.max_repos = n;
        }

        if let Some(path) = git_path {
            self.git.git_path = path;
        }

        if let Some(path) = gh_path {
            self.github.gh_path = path;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        output: Option<PathBuf>,
        max_repos: Option<u32>,
        git_path: Option<String>,
        gh_path: Option<String>,
    ) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(output, max_repos, git_path, gh_path))
    }
}
