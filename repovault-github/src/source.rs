//! Polymorphic repository discovery

use async_trait::async_trait;
use repovault_core::RepoName;

use crate::Result;

/// A strategy for listing the repositories of one account.
///
/// The owned and starred listings differ only in how they talk to gh, so
/// filtering and cloning stay strategy-agnostic behind this trait.
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// Short name of this source, used in logs
    fn name(&self) -> &'static str;

    /// Produce the full listing for `account`, in discovery order
    async fn list(&self, account: &str) -> Result<Vec<RepoName>>;
}
