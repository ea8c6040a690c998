//! Artifact download into a scoped temporary directory

use crate::ci::client::CiClient;
use crate::error::{VsixError, VsixResult};
use crate::platform::Platform;
use std::path::Path;
use tempfile::TempDir;
use tracing::{debug, warn};

/// A downloaded artifact. The directory is removed when this is dropped.
#[derive(Debug)]
pub struct ArtifactDir {
    dir: TempDir,
    name: String,
}

impl ArtifactDir {
    /// Directory holding the artifact contents
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Artifact name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Remove the directory now, logging instead of failing if that doesn't work
    pub fn close(self) {
        let path = self.dir.path().to_path_buf();
        if let Err(e) = self.dir.close() {
            warn!("Failed to remove temporary directory {}: {}", path.display(), e);
        }
    }
}

/// Download `artifact` from run `run_id` into a fresh temporary directory
///
/// On failure the temporary directory is removed before the error is returned.
pub async fn fetch_artifact(
    ci: &dyn CiClient,
    run_id: u64,
    artifact: &str,
    platform: Platform,
) -> VsixResult<ArtifactDir> {
    let download_error = |reason: String| VsixError::ArtifactDownload {
        artifact: artifact.to_string(),
        platform: platform.to_string(),
        run_id,
        reason,
    };

    let dir = tempfile::Builder::new()
        .prefix("vsix-pr-")
        .tempdir()
        .map_err(|e| download_error(format!("creating temporary directory: {e}")))?;

    debug!(
        "Downloading artifact {} from run {} into {}",
        artifact,
        run_id,
        dir.path().display()
    );

    // `dir` drops on the error path, removing any partial download
    ci.download_artifact(run_id, artifact, dir.path())
        .await
        .map_err(|e| download_error(e.to_string()))?;

    Ok(ArtifactDir {
        dir,
        name: artifact.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ci::fake::FakeCi;

    #[tokio::test]
    async fn downloads_into_temp_dir() {
        let mut ci = FakeCi::with_branch("b");
        ci.artifact_files = vec![("continue-1.0.0.vsix".to_string(), b"pk".to_vec())];

        let artifact = fetch_artifact(&ci, 9, "build-Linux", Platform::Linux)
            .await
            .unwrap();
        assert!(artifact.path().join("continue-1.0.0.vsix").exists());
        assert_eq!(artifact.name(), "build-Linux");
        assert_eq!(ci.downloads(), vec![(9, "build-Linux".to_string())]);

        let path = artifact.path().to_path_buf();
        artifact.close();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn failed_download_removes_temp_dir() {
        let mut ci = FakeCi::with_branch("b");
        ci.fail_download = true;

        let err = fetch_artifact(&ci, 9, "build-macOS", Platform::MacOS)
            .await
            .unwrap_err();

        match &err {
            VsixError::ArtifactDownload {
                artifact, platform, ..
            } => {
                assert_eq!(artifact, "build-macOS");
                assert_eq!(platform, "macos");
            }
            other => panic!("expected ArtifactDownload, got {other:?}"),
        }

        let dirs = ci.download_dirs();
        assert_eq!(dirs.len(), 1);
        assert!(!dirs[0].exists());
    }
}
