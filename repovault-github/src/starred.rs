//! Starred-repository listing via the paginated REST endpoint

use std::sync::Arc;

use async_trait::async_trait;
use repovault_core::RepoName;
use serde::Deserialize;
use tracing::debug;

use crate::{Error, GhRunner, RepoSource, Result};

/// Page size requested from the starred endpoint
const PAGE_SIZE: u32 = 100;

#[derive(Debug, Deserialize)]
struct StarredEntry {
    full_name: String,
}

/// Lists the repositories an account has starred.
///
/// Pages through `GET /users/{account}/starred` until a page comes back
/// empty. A page that does not parse as the expected array shape is a
/// [`Error::Parse`], which the caller may treat as recoverable for that
/// account; a failed gh invocation is not.
pub struct StarredRepos {
    runner: Arc<dyn GhRunner>,
}

impl StarredRepos {
    /// Create a starred-repository source
    pub fn new(runner: Arc<dyn GhRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl RepoSource for StarredRepos {
    fn name(&self) -> &'static str {
        "starred"
    }

    async fn list(&self, account: &str) -> Result<Vec<RepoName>> {
        let mut names = Vec::new();
        let mut page = 1u32;

        loop {
            let endpoint = format!(
                "users/{}/starred?per_page={}&page={}",
                account, PAGE_SIZE, page
            );
            let body = self.runner.run(&["api".to_string(), endpoint]).await?;

            let entries = parse_starred_page(account, &body)?;
            if entries.is_empty() {
                // End of pagination, not an error
                break;
            }

            names.extend(entries);
            page += 1;
        }

        debug!(account, count = names.len(), "listed starred repositories");
        Ok(names)
    }
}

fn parse_starred_page(account: &str, body: &[u8]) -> Result<Vec<RepoName>> {
    let entries: Vec<StarredEntry> =
        serde_json::from_slice(body).map_err(|e| Error::Parse {
            account: account.to_string(),
            reason: e.to_string(),
        })?;

    Ok(entries
        .into_iter()
        .map(|entry| RepoName::new(entry.full_name))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Runner returning canned bodies, recording every argument list.
    struct FakeRunner {
        pages: Mutex<Vec<Vec<u8>>>,
        calls: Mutex<Vec<Vec<String>>>,
    }

    impl FakeRunner {
        fn new(pages: Vec<&str>) -> Self {
            Self {
                pages: Mutex::new(pages.into_iter().rev().map(|p| p.as_bytes().to_vec()).collect()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl GhRunner for FakeRunner {
        async fn run(&self, args: &[String]) -> Result<Vec<u8>> {
            self.calls.lock().unwrap().push(args.to_vec());
            Ok(self.pages.lock().unwrap().pop().expect("unexpected extra gh call"))
        }
    }

    fn page_of(count: usize, prefix: &str) -> String {
        let entries: Vec<String> = (0..count)
            .map(|i| format!(r#"{{"full_name": "{}/repo{}"}}"#, prefix, i))
            .collect();
        format!("[{}]", entries.join(","))
    }

    #[tokio::test]
    async fn test_pagination_stops_on_empty_page() {
        let full = page_of(100, "acme");
        let runner = Arc::new(FakeRunner::new(vec![full.as_str(), "[]"]));
        let source = StarredRepos::new(runner.clone());

        let names = source.list("acme").await.unwrap();
        assert_eq!(names.len(), 100);
        assert_eq!(runner.call_count(), 2);
    }

    #[tokio::test]
    async fn test_pages_concatenated_in_order() {
        let first = r#"[{"full_name": "acme/a"}]"#;
        let second = r#"[{"full_name": "acme/b"}]"#;
        let runner = Arc::new(FakeRunner::new(vec![first, second, "[]"]));
        let source = StarredRepos::new(runner.clone());

        let names = source.list("acme").await.unwrap();
        assert_eq!(names, vec![RepoName::new("acme/a"), RepoName::new("acme/b")]);
        assert_eq!(runner.call_count(), 3);
    }

    #[tokio::test]
    async fn test_page_numbers_increment() {
        let runner = Arc::new(FakeRunner::new(vec![r#"[{"full_name": "acme/a"}]"#, "[]"]));
        let source = StarredRepos::new(runner.clone());
        source.list("acme").await.unwrap();

        let calls = runner.calls.lock().unwrap();
        assert_eq!(calls[0][1], "users/acme/starred?per_page=100&page=1");
        assert_eq!(calls[1][1], "users/acme/starred?per_page=100&page=2");
    }

    #[tokio::test]
    async fn test_malformed_page_is_parse_error() {
        let runner = Arc::new(FakeRunner::new(vec![r#"{"message": "rate limited"}"#]));
        let source = StarredRepos::new(runner);

        let err = source.list("acme").await.unwrap_err();
        assert!(matches!(err, Error::Parse { ref account, .. } if account == "acme"));
    }

    #[tokio::test]
    async fn test_no_stars_is_one_call() {
        let runner = Arc::new(FakeRunner::new(vec!["[]"]));
        let source = StarredRepos::new(runner.clone());

        let names = source.list("acme").await.unwrap();
        assert!(names.is_empty());
        assert_eq!(runner.call_count(), 1);
    }
}
