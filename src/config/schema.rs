//! Configuration schema for vsix-pr
//!
//! Configuration is stored at `~/.config/vsix-pr/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Repository and CI settings
    pub github: GithubConfig,

    /// Host editor settings
    pub editor: EditorConfig,

    /// Package cache settings
    pub cache: CacheConfig,
}

/// Repository and CI workflow settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// Repository in `owner/name` form
    pub repo: String,

    /// Workflow file or name whose runs publish the extension artifacts
    pub workflow: String,

    /// Artifact name prefix; the platform suffix (`macOS`, `Linux`) is appended
    pub artifact_prefix: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            repo: "continuedev/continue".to_string(),
            workflow: "main.yaml".to_string(),
            artifact_prefix: "vscode-extension-build-".to_string(),
        }
    }
}

/// Host editor settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Editor CLI used for `--install-extension` (code, code-insiders, cursor, ...)
    pub command: String,

    /// Marketplace identifier used for pre-release installs
    pub marketplace_id: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            command: "code".to_string(),
            marketplace_id: "Continue.continue".to_string(),
        }
    }
}

/// Package cache settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache directory override (defaults to the per-user cache dir)
    pub dir: Option<PathBuf>,
}

impl CacheConfig {
    /// Effective cache root
    pub fn root(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(Self::default_root)
    }

    /// Default per-user cache root
    pub fn default_root() -> PathBuf {
        dirs::cache_dir()
            .or_else(dirs::data_local_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("vsix-pr")
    }
}
