//! CI query abstraction
//!
//! Provides a trait for the repository/CI operations the install pipeline
//! needs, so the pipeline can run against the `gh` CLI or a test double.

use crate::ci::run::WorkflowRun;
use crate::error::VsixResult;
use async_trait::async_trait;
use std::path::Path;

/// Repository and CI query interface
#[async_trait]
pub trait CiClient: Send + Sync {
    /// Head branch name of a pull request. May be empty if the API returned nothing.
    async fn pull_request_branch(&self, pr: u64) -> VsixResult<String>;

    /// Runs of `workflow` on `branch`, in the order the API returns them
    async fn list_runs(&self, branch: &str, workflow: &str) -> VsixResult<Vec<WorkflowRun>>;

    /// Download the artifact named `name` from run `run_id` into `dest`
    async fn download_artifact(&self, run_id: u64, name: &str, dest: &Path) -> VsixResult<()>;

    /// Human-readable client name for logs
    fn client_name(&self) -> &'static str;
}
