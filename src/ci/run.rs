//! Workflow run model and run selection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One execution of a CI workflow, as reported by `gh run list --json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRun {
    #[serde(rename = "databaseId")]
    pub id: u64,

    /// queued, in_progress, completed, ...
    #[serde(default)]
    pub status: String,

    /// success, failure, cancelled, ... (empty until the run completes)
    #[serde(default)]
    pub conclusion: String,

    #[serde(rename = "headBranch", default)]
    pub branch: String,

    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl WorkflowRun {
    /// Whether this run finished and passed
    pub fn is_successful(&self) -> bool {
        self.status == "completed" && self.conclusion == "success"
    }
}

/// Pick the first completed-and-successful run in listing order.
///
/// The listing is expected newest-first. If timestamps show otherwise a
/// warning is logged, but the listing order is still honored.
pub fn latest_successful(runs: &[WorkflowRun]) -> Option<&WorkflowRun> {
    if !is_newest_first(runs) {
        warn!("Run listing is not ordered newest-first; selecting the first successful run as listed");
    }
    runs.iter().find(|r| r.is_successful())
}

/// Runs without a timestamp are ignored for the ordering check.
fn is_newest_first(runs: &[WorkflowRun]) -> bool {
    let stamps: Vec<DateTime<Utc>> = runs.iter().filter_map(|r| r.created_at).collect();
    stamps.windows(2).all(|w| w[0] >= w[1])
}
