//! Host editor extension installation
//!
//! Installs go through the editor's own CLI (`code --install-extension`).

use crate::config::schema::EditorConfig;
use crate::error::{VsixError, VsixResult};
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Abstract extension install interface
#[async_trait]
pub trait ExtensionHost: Send + Sync {
    /// Install a local package file
    async fn install_from_path(&self, path: &Path) -> VsixResult<()>;

    /// Install the latest pre-release of a marketplace extension
    async fn install_prerelease(&self, marketplace_id: &str) -> VsixResult<()>;

    /// Name of the editor CLI, for messages
    fn host_name(&self) -> &str;
}

/// Extension host driven by an editor CLI (`code`, `code-insiders`, `cursor`, ...)
pub struct EditorCli {
    command: String,
}

impl EditorCli {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            command: config.command.clone(),
        }
    }

    async fn install(&self, args: &[&str]) -> VsixResult<()> {
        let command_line = format!("{} {}", self.command, args.join(" "));
        debug!("Executing: {}", command_line);

        let output = Command::new(&self.command)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| VsixError::command_failed(command_line, e))?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            // The editor CLI reports some failures on stdout
            let detail = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            Err(VsixError::Install {
                target: args.get(1).copied().unwrap_or_default().to_string(),
                stderr: detail,
            })
        }
    }
}

#[async_trait]
impl ExtensionHost for EditorCli {
    async fn install_from_path(&self, path: &Path) -> VsixResult<()> {
        let path = path.to_string_lossy();
        self.install(&["--install-extension", &path]).await?;
        info!("Installed {} with {}", path, self.command);
        Ok(())
    }

    async fn install_prerelease(&self, marketplace_id: &str) -> VsixResult<()> {
        self.install(&["--install-extension", marketplace_id, "--pre-release"])
            .await?;
        info!("Installed pre-release of {} with {}", marketplace_id, self.command);
        Ok(())
    }

    fn host_name(&self) -> &str {
        &self.command
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! Recording `ExtensionHost` for pipeline tests

    use super::ExtensionHost;
    use crate::error::{VsixError, VsixResult};
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Installed {
        Path(PathBuf),
        Prerelease(String),
    }

    #[derive(Default)]
    pub struct FakeHost {
        fail: bool,
        installs: Mutex<Vec<Installed>>,
    }

    impl FakeHost {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        pub fn installs(&self) -> Vec<Installed> {
            self.installs.lock().unwrap().clone()
        }

        fn record(&self, item: Installed, target: String) -> VsixResult<()> {
            self.installs.lock().unwrap().push(item);
            if self.fail {
                return Err(VsixError::Install {
                    target,
                    stderr: "Failed Installing Extensions".to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ExtensionHost for FakeHost {
        async fn install_from_path(&self, path: &Path) -> VsixResult<()> {
            self.record(
                Installed::Path(path.to_path_buf()),
                path.display().to_string(),
            )
        }

        async fn install_prerelease(&self, marketplace_id: &str) -> VsixResult<()> {
            self.record(
                Installed::Prerelease(marketplace_id.to_string()),
                marketplace_id.to_string(),
            )
        }

        fn host_name(&self) -> &str {
            "fake"
        }
    }
}
