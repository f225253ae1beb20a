use thiserror::Error;

/// All failures surface as one opaque variant: callers react to success or
/// failure, never to the error class.
#[derive(Debug, Error)]
pub enum GitHubClientError {
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
