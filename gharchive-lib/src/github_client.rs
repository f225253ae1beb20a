use crate::error::GitHubClientError;
use crate::github_api::GitHubApi;
use crate::lister::PAGE_SIZE;
use crate::logging_middleware::LoggingMiddleware;
use crate::object_model::Repo;
use crate::result::GitHubClientResult;
use anyhow::anyhow;
use async_trait::async_trait;
use log::Level;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::{Client, IntoUrl, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use serde::Serialize;

#[derive(Serialize)]
struct ArchivePatch {
    archived: bool,
}

/// HTTP client for the three endpoints the tool uses, constructed explicitly
/// from a base URL and token so callers control its lifetime and tests can
/// substitute a fake behind [`GitHubApi`].
pub struct GitHubClient {
    url: Url,
    token: String,
    client: ClientWithMiddleware,
}

impl GitHubClient {
    pub fn new<U>(url: U, token: &str) -> GitHubClientResult<Self>
    where
        U: IntoUrl,
    {
        let client = ClientBuilder::new(Client::new())
            .with(LoggingMiddleware::new(Level::Debug))
            .build();

        Ok(Self {
            url: url
                .into_url()
                .map_err(|e| GitHubClientError::Other(anyhow!(e)))?,
            token: String::from(token),
            client,
        })
    }

    fn api_url(&self, path: &str) -> GitHubClientResult<Url> {
        self.url
            .join(path)
            .map_err(|e| GitHubClientError::Other(anyhow!(e)))
    }

    fn decorate(&self, request_builder: RequestBuilder) -> RequestBuilder {
        request_builder
            .header(USER_AGENT, "gharchive")
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .bearer_auth(&self.token)
    }

    async fn send_mutation(&self, request_builder: RequestBuilder) -> GitHubClientResult<()> {
        self.decorate(request_builder)
            .send()
            .await
            .map_err(|e| GitHubClientError::Other(anyhow!(e)))?
            .error_for_status()
            .map_err(|e| GitHubClientError::Other(anyhow!(e)))?;
        Ok(())
    }
}

#[async_trait]
impl GitHubApi for GitHubClient {
    async fn list_repos_page(&self, username: &str, page: usize) -> GitHubClientResult<Vec<Repo>> {
        let url = self.api_url(&format!("/users/{username}/repos"))?;

        self.decorate(self.client.get(url))
            .query(&[("per_page", PAGE_SIZE), ("page", page)])
            .query(&[("sort", "updated"), ("direction", "desc")])
            .send()
            .await
            .map_err(|e| GitHubClientError::Other(anyhow!(e)))?
            .error_for_status()
            .map_err(|e| GitHubClientError::Other(anyhow!(e)))?
            .json::<Vec<Repo>>()
            .await
            .map_err(|e| GitHubClientError::Other(anyhow!(e)))
    }

    async fn archive_repo(&self, owner: &str, repo: &str) -> GitHubClientResult<()> {
        let url = self.api_url(&format!("/repos/{owner}/{repo}"))?;
        self.send_mutation(self.client.patch(url).json(&ArchivePatch { archived: true }))
            .await
    }

    async fn delete_repo(&self, owner: &str, repo: &str) -> GitHubClientResult<()> {
        let url = self.api_url(&format!("/repos/{owner}/{repo}"))?;
        self.send_mutation(self.client.delete(url)).await
    }
}
