mod error;
mod github_api;
mod github_client;
mod lister;
mod logging_middleware;
mod mutator;
mod object_model;
mod progress;
mod result;

pub use self::error::GitHubClientError;
pub use self::github_api::GitHubApi;
pub use self::github_client::GitHubClient;
pub use self::lister::{list_repositories, RepoFilter, PAGE_SIZE};
pub use self::logging_middleware::LoggingMiddleware;
pub use self::mutator::{run_batch, OperationResult, RepoOperation};
pub use self::object_model::Repo;
pub use self::progress::{ProgressSink, SilentProgress};
pub use self::result::GitHubClientResult;
