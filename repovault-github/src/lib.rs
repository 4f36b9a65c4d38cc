//! Repovault GitHub - Repository discovery for repovault
//!
//! This crate lists the repositories of a user or organization through the
//! gh CLI, either the repositories it owns (`gh repo list`) or the ones it
//! has starred (the paginated `users/{account}/starred` endpoint).

mod error;
mod owned;
mod runner;
mod source;
mod starred;

pub use error::{Error, Result};
pub use owned::OwnedRepos;
pub use runner::{GhCli, GhRunner};
pub use source::RepoSource;
pub use starred::StarredRepos;
