//! PR → branch → run resolution

use crate::ci::client::CiClient;
use crate::ci::run::latest_successful;
use crate::error::{VsixError, VsixResult};
use tracing::{debug, info};

/// Resolve the head branch of a pull request
pub async fn resolve_branch(ci: &dyn CiClient, pr: u64) -> VsixResult<String> {
    debug!("Resolving branch for PR #{} via {}", pr, ci.client_name());

    let branch = ci.pull_request_branch(pr).await?;
    if branch.trim().is_empty() {
        return Err(VsixError::PullRequestNotFound {
            pr,
            reason: "no head branch returned".to_string(),
        });
    }

    info!("PR #{} is on branch {}", pr, branch);
    Ok(branch)
}

/// Locate the most recent successful run of `workflow` on `branch`
///
/// `pr` is only used to name the pull request in the not-found error.
pub async fn locate_run(
    ci: &dyn CiClient,
    branch: &str,
    workflow: &str,
    pr: u64,
) -> VsixResult<u64> {
    let runs = ci.list_runs(branch, workflow).await?;
    debug!("Found {} run(s) of {} on {}", runs.len(), workflow, branch);

    match latest_successful(&runs) {
        Some(run) => {
            info!("Using run {} from branch {}", run.id, branch);
            Ok(run.id)
        }
        None => Err(VsixError::NoSuccessfulRun {
            pr,
            branch: branch.to_string(),
            workflow: workflow.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ci::fake::{run, FakeCi};

    #[tokio::test]
    async fn resolves_branch() {
        let ci = FakeCi::with_branch("feature/login");
        assert_eq!(resolve_branch(&ci, 12).await.unwrap(), "feature/login");
    }

    #[tokio::test]
    async fn empty_branch_is_resolution_error() {
        let ci = FakeCi::with_branch("  ");
        let err = resolve_branch(&ci, 12).await.unwrap_err();
        assert!(matches!(err, VsixError::PullRequestNotFound { pr: 12, .. }));
    }

    #[tokio::test]
    async fn locates_first_successful_run() {
        let mut ci = FakeCi::with_branch("b");
        ci.runs = vec![
            run(30, "completed", "failure"),
            run(20, "completed", "success"),
            run(10, "completed", "success"),
        ];

        assert_eq!(locate_run(&ci, "b", "main.yaml", 1).await.unwrap(), 20);
        assert_eq!(ci.listed(), vec![("b".to_string(), "main.yaml".to_string())]);
    }

    #[tokio::test]
    async fn no_successful_run_names_pr() {
        let mut ci = FakeCi::with_branch("b");
        ci.runs = vec![run(30, "in_progress", "")];

        let err = locate_run(&ci, "b", "main.yaml", 77).await.unwrap_err();
        assert!(err.to_string().contains("PR #77"));
        assert!(matches!(err, VsixError::NoSuccessfulRun { pr: 77, .. }));
    }
}
