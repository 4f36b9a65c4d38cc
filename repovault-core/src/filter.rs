//! Allow-list filtering of repository listings

use crate::RepoName;

/// Keep the names present in `allow`, or everything when `allow` is empty.
///
/// Matching is exact string equality on the full `owner/repo` form after
/// trimming the allow-list entries. No globbing, no case folding.
pub fn apply(names: Vec<RepoName>, allow: &[String]) -> Vec<RepoName> {
    if allow.is_empty() {
        return names;
    }

    names
        .into_iter()
        .filter(|name| allow.iter().any(|entry| entry.trim() == name.as_str()))
        .collect()
}
