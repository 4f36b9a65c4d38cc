//! Repository naming and clone destinations

use std::fmt;
use std::path::{Path, PathBuf};

/// A fully qualified repository name in `owner/repo` form.
///
/// The name is an opaque identifier: listing and filtering compare it by
/// exact string equality, so no structural validation is applied here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoName(String);

impl RepoName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// SSH clone URL of the main repository
    pub fn ssh_url(&self) -> String {
        format!("git@github.com:{}.git", self.0)
    }

    /// SSH clone URL of the wiki repository
    pub fn wiki_ssh_url(&self) -> String {
        format!("git@github.com:{}.wiki.git", self.0)
    }

    /// Record name of the wiki, always `{name}.wiki`
    pub fn wiki_name(&self) -> String {
        format!("{}.wiki", self.0)
    }

    /// Local mirror destination under `output`
    pub fn mirror_dir(&self, output: &Path) -> PathBuf {
        output.join(format!("{}.git", self.0))
    }

    /// Local mirror destination of the wiki under `output`
    pub fn wiki_mirror_dir(&self, output: &Path) -> PathBuf {
        output.join(format!("{}.wiki.git", self.0))
    }
}

impl fmt::Display for RepoName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ssh_urls() {
        let name = RepoName::new("acme/foo");
        assert_eq!(name.ssh_url(), "git@github.com:acme/foo.git");
        assert_eq!(name.wiki_ssh_url(), "git@github.com:acme/foo.wiki.git");
    }

    #[test]
    fn test_wiki_name_derivation() {
        let name = RepoName::new("acme/foo");
        assert_eq!(name.wiki_name(), "acme/foo.wiki");
    }

    #[test]
    fn test_mirror_destinations() {
        let name = RepoName::new("acme/foo");
        let output = Path::new("repos");
        assert_eq!(name.mirror_dir(output), PathBuf::from("repos/acme/foo.git"));
        assert_eq!(
            name.wiki_mirror_dir(output),
            PathBuf::from("repos/acme/foo.wiki.git")
        );
    }
}
