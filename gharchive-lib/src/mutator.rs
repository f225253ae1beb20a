use crate::error::GitHubClientError;
use crate::github_api::GitHubApi;
use crate::progress::ProgressSink;

/// The two mutations a batch can apply.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RepoOperation {
    /// Set `archived: true` on the repository.
    Archive,
    /// Delete the repository outright.
    Delete,
}

impl RepoOperation {
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Archive => "Archiving",
            Self::Delete => "Deleting",
        }
    }
}

/// Outcome of one mutation within a batch.
#[derive(Debug)]
pub struct OperationResult {
    pub name: String,
    pub success: bool,
    pub error: Option<GitHubClientError>,
}

/// Applies `operation` to each named repository, strictly in order. A failure
/// is recorded in that name's result and the batch moves on; nothing is
/// rolled back, so the returned sequence is the only record of what changed.
/// Returns exactly one result per input name, in input order.
pub async fn run_batch<A>(
    api: &A,
    owner: &str,
    names: &[String],
    operation: RepoOperation,
    progress: &dyn ProgressSink,
) -> Vec<OperationResult>
where
    A: GitHubApi + ?Sized,
{
    progress.batch_started(operation, names.len());

    let mut results = Vec::with_capacity(names.len());
    for name in names {
        progress.step_started(operation, name);

        let outcome = match operation {
            RepoOperation::Archive => api.archive_repo(owner, name).await,
            RepoOperation::Delete => api.delete_repo(owner, name).await,
        };

        results.push(match outcome {
            Ok(()) => {
                progress.step_succeeded(operation, name);
                OperationResult {
                    name: name.clone(),
                    success: true,
                    error: None,
                }
            }
            Err(e) => {
                progress.step_failed(operation, name, &e);
                OperationResult {
                    name: name.clone(),
                    success: false,
                    error: Some(e),
                }
            }
        });
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object_model::Repo;
    use crate::progress::SilentProgress;
    use crate::result::GitHubClientResult;
    use anyhow::anyhow;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeApi {
        failing: Vec<&'static str>,
        archived: Mutex<Vec<String>>,
        deleted: Mutex<Vec<String>>,
    }

    impl FakeApi {
        fn new() -> Self {
            Self {
                failing: Vec::new(),
                archived: Mutex::new(Vec::new()),
                deleted: Mutex::new(Vec::new()),
            }
        }

        fn failing_on(names: Vec<&'static str>) -> Self {
            Self {
                failing: names,
                ..Self::new()
            }
        }

        fn check(&self, repo: &str) -> GitHubClientResult<()> {
            if self.failing.contains(&repo) {
                return Err(GitHubClientError::Other(anyhow!("mutation refused")));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl GitHubApi for FakeApi {
        async fn list_repos_page(
            &self,
            _username: &str,
            _page: usize,
        ) -> GitHubClientResult<Vec<Repo>> {
            unreachable!("the mutator never lists")
        }

        async fn archive_repo(&self, _owner: &str, repo: &str) -> GitHubClientResult<()> {
            self.check(repo)?;
            self.archived.lock().unwrap().push(repo.to_string());
            Ok(())
        }

        async fn delete_repo(&self, _owner: &str, repo: &str) -> GitHubClientResult<()> {
            self.check(repo)?;
            self.deleted.lock().unwrap().push(repo.to_string());
            Ok(())
        }
    }

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn test_results_preserve_input_order() {
        let api = FakeApi::new();

        let results = run_batch(
            &api,
            "testuser",
            &names(&["alpha", "beta", "gamma"]),
            RepoOperation::Archive,
            &SilentProgress,
        )
        .await;

        let result_names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(vec!["alpha", "beta", "gamma"], result_names);
        assert!(results.iter().all(|r| r.success && r.error.is_none()));
        assert_eq!(
            vec!["alpha", "beta", "gamma"],
            *api.archived.lock().unwrap()
        );
    }

    #[tokio::test]
    async fn test_failure_is_recorded_and_batch_continues() {
        let api = FakeApi::failing_on(vec!["beta"]);

        let results = run_batch(
            &api,
            "testuser",
            &names(&["alpha", "beta"]),
            RepoOperation::Archive,
            &SilentProgress,
        )
        .await;

        assert_eq!(2, results.len());
        assert!(results[0].success);
        assert!(results[0].error.is_none());
        assert!(!results[1].success);
        assert!(results[1].error.is_some());
        assert_eq!(vec!["alpha"], *api.archived.lock().unwrap());
    }

    #[tokio::test]
    async fn test_leading_failure_does_not_block_later_items() {
        let api = FakeApi::failing_on(vec!["alpha"]);

        let results = run_batch(
            &api,
            "testuser",
            &names(&["alpha", "beta"]),
            RepoOperation::Delete,
            &SilentProgress,
        )
        .await;

        assert!(!results[0].success);
        assert!(results[1].success);
        assert_eq!(vec!["beta"], *api.deleted.lock().unwrap());
    }

    #[tokio::test]
    async fn test_empty_input_issues_no_calls() {
        let api = FakeApi::new();

        let results = run_batch(&api, "testuser", &[], RepoOperation::Archive, &SilentProgress)
            .await;

        assert!(results.is_empty());
        assert!(api.archived.lock().unwrap().is_empty());
        assert!(api.deleted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_operation_uses_the_delete_call() {
        let api = FakeApi::new();

        run_batch(
            &api,
            "testuser",
            &names(&["old-fork"]),
            RepoOperation::Delete,
            &SilentProgress,
        )
        .await;

        assert!(api.archived.lock().unwrap().is_empty());
        assert_eq!(vec!["old-fork"], *api.deleted.lock().unwrap());
    }

    struct RecordingSink(Mutex<Vec<String>>);

    impl ProgressSink for RecordingSink {
        fn batch_started(&self, operation: RepoOperation, count: usize) {
            self.0
                .lock()
                .unwrap()
                .push(format!("batch {} {count}", operation.verb()));
        }

        fn step_started(&self, _operation: RepoOperation, name: &str) {
            self.0.lock().unwrap().push(format!("start {name}"));
        }

        fn step_succeeded(&self, _operation: RepoOperation, name: &str) {
            self.0.lock().unwrap().push(format!("ok {name}"));
        }

        fn step_failed(&self, _operation: RepoOperation, name: &str, _error: &GitHubClientError) {
            self.0.lock().unwrap().push(format!("fail {name}"));
        }
    }

    #[tokio::test]
    async fn test_progress_narration_follows_batch_order() {
        let api = FakeApi::failing_on(vec!["beta"]);
        let sink = RecordingSink(Mutex::new(Vec::new()));

        run_batch(
            &api,
            "testuser",
            &names(&["alpha", "beta"]),
            RepoOperation::Archive,
            &sink,
        )
        .await;

        assert_eq!(
            vec![
                "batch Archiving 2",
                "start alpha",
                "ok alpha",
                "start beta",
                "fail beta"
            ],
            *sink.0.lock().unwrap()
        );
    }
}
