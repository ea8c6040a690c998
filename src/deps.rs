//! Presence checks for the external CLIs the pipelines drive

use crate::error::{VsixError, VsixResult};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// An external tool a command needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    pub hint: String,
}

impl Dependency {
    /// The GitHub CLI
    pub fn gh() -> Self {
        Self {
            name: "gh".to_string(),
            hint: "Install from https://cli.github.com and run: gh auth login".to_string(),
        }
    }

    /// The editor CLI used for installs
    pub fn editor(command: &str) -> Self {
        Self {
            name: command.to_string(),
            hint: format!(
                "Make sure '{}' is on PATH (VS Code: run 'Shell Command: Install code command in PATH')",
                command
            ),
        }
    }

    /// Whether the tool can be started
    pub async fn is_installed(&self) -> bool {
        Command::new(&self.name)
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

/// Fail with `DependencyMissing` for the first tool that isn't available
pub async fn ensure_installed(deps: &[Dependency]) -> VsixResult<()> {
    for dep in deps {
        debug!("Checking for {}", dep.name);
        if !dep.is_installed().await {
            return Err(VsixError::DependencyMissing {
                name: dep.name.clone(),
                hint: dep.hint.clone(),
            });
        }
    }
    Ok(())
}
