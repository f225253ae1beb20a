use crate::github_api::GitHubApi;
use crate::object_model::Repo;
use crate::result::GitHubClientResult;

/// Fixed page size for the list endpoint. A page shorter than this is the
/// end-of-data signal.
pub const PAGE_SIZE: usize = 100;

/// Post-fetch partition of a user's repositories.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RepoFilter {
    /// Repositories the user created themselves, still active.
    Owned,
    /// Forks of other repositories, still active.
    Forks,
}

impl RepoFilter {
    pub fn matches(&self, repo: &Repo) -> bool {
        match self {
            Self::Owned => !repo.archived && !repo.fork,
            Self::Forks => repo.fork && !repo.archived,
        }
    }
}

/// Fetches every page of `username`'s repositories and keeps the records
/// matching `filter`. Fetching continues while pages come back full; any
/// error aborts the whole listing, leaving no partial result.
pub async fn list_repositories<A>(
    api: &A,
    username: &str,
    filter: RepoFilter,
) -> GitHubClientResult<Vec<Repo>>
where
    A: GitHubApi + ?Sized,
{
    let mut all_repos = Vec::new();
    let mut page = 1;

    loop {
        let repos = api.list_repos_page(username, page).await?;
        let full_page = repos.len() == PAGE_SIZE;
        all_repos.extend(repos);
        if !full_page {
            break;
        }
        page += 1;
    }

    Ok(all_repos
        .into_iter()
        .filter(|repo| filter.matches(repo))
        .collect())
}
