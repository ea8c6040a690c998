//! GitHub CI client using the gh CLI

use crate::ci::client::CiClient;
use crate::ci::run::WorkflowRun;
use crate::config::schema::GithubConfig;
use crate::error::{VsixError, VsixResult};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Upper bound on runs fetched per listing
const RUN_LIST_LIMIT: &str = "30";

/// CI client backed by `gh`
pub struct GhCli {
    repo: String,
}

impl GhCli {
    /// Create a client for the configured repository
    pub fn new(config: &GithubConfig) -> Self {
        Self {
            repo: config.repo.clone(),
        }
    }

    /// Execute a gh command and return the output
    async fn exec(&self, args: &[&str]) -> VsixResult<std::process::Output> {
        debug!("Executing: gh {:?}", args);

        Command::new("gh")
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| VsixError::command_failed(format!("gh {}", args.join(" ")), e))
    }
}

#[async_trait]
impl CiClient for GhCli {
    async fn pull_request_branch(&self, pr: u64) -> VsixResult<String> {
        let number = pr.to_string();
        let output = self
            .exec(&[
                "pr",
                "view",
                &number,
                "--repo",
                &self.repo,
                "--json",
                "headRefName",
                "--jq",
                ".headRefName",
            ])
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VsixError::PullRequestNotFound {
                pr,
                reason: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    async fn list_runs(&self, branch: &str, workflow: &str) -> VsixResult<Vec<WorkflowRun>> {
        let output = self
            .exec(&[
                "run",
                "list",
                "--repo",
                &self.repo,
                "--branch",
                branch,
                "--workflow",
                workflow,
                "--limit",
                RUN_LIST_LIMIT,
                "--json",
                "databaseId,status,conclusion,headBranch,createdAt",
            ])
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(VsixError::command_exec("gh run list", stderr.trim()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if stdout.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&stdout)?)
    }

    async fn download_artifact(&self, run_id: u64, name: &str, dest: &Path) -> VsixResult<()> {
        let run = run_id.to_string();
        let dir = dest.to_string_lossy();
        let output = self
            .exec(&[
                "run", "download", &run, "--repo", &self.repo, "--name", name, "--dir", &dir,
            ])
            .await?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(VsixError::command_exec("gh run download", stderr.trim()))
        }
    }

    fn client_name(&self) -> &'static str {
        "GitHub CLI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gh_client_new() {
        let client = GhCli::new(&GithubConfig::default());
        assert_eq!(client.repo, "continuedev/continue");
        assert_eq!(client.client_name(), "GitHub CLI");
    }
}
