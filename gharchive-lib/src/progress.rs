use crate::error::GitHubClientError;
use crate::mutator::RepoOperation;

/// Receives per-item narration from the batch mutator. Keeping this behind a
/// trait keeps the mutator free of console concerns; the `--quiet` flag maps
/// to [`SilentProgress`].
pub trait ProgressSink {
    fn batch_started(&self, operation: RepoOperation, count: usize);
    fn step_started(&self, operation: RepoOperation, name: &str);
    fn step_succeeded(&self, operation: RepoOperation, name: &str);
    fn step_failed(&self, operation: RepoOperation, name: &str, error: &GitHubClientError);
}

/// Discards all narration.
pub struct SilentProgress;

impl ProgressSink for SilentProgress {
    fn batch_started(&self, _operation: RepoOperation, _count: usize) {}

    fn step_started(&self, _operation: RepoOperation, _name: &str) {}

    fn step_succeeded(&self, _operation: RepoOperation, _name: &str) {}

    fn step_failed(&self, _operation: RepoOperation, _name: &str, _error: &GitHubClientError) {}
}
