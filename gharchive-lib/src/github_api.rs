use crate::object_model::Repo;
use crate::result::GitHubClientResult;
use async_trait::async_trait;

/// The slice of the GitHub REST API this tool touches. Implemented by
/// [`GitHubClient`](crate::GitHubClient) against the real service and by
/// in-memory fakes in tests.
#[async_trait]
pub trait GitHubApi {
    /// Fetch one page of `username`'s repositories, most recently updated
    /// first. Pages are numbered from 1.
    async fn list_repos_page(&self, username: &str, page: usize) -> GitHubClientResult<Vec<Repo>>;

    /// Mark a repository read-only.
    async fn archive_repo(&self, owner: &str, repo: &str) -> GitHubClientResult<()>;

    /// Permanently delete a repository.
    async fn delete_repo(&self, owner: &str, repo: &str) -> GitHubClientResult<()>;
}
