//! Error types for vsix-pr
//!
//! All modules use `VsixResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for vsix-pr operations
pub type VsixResult<T> = Result<T, VsixError>;

/// All errors that can occur in vsix-pr
#[derive(Error, Debug)]
pub enum VsixError {
    // Usage errors
    #[error("{0}")]
    Usage(String),

    #[error("Invalid platform: {0}. Expected one of: macos, linux")]
    InvalidPlatform(String),

    // Environment errors
    #[error("Unsupported platform: {0}. vsix-pr supports macOS and Linux.")]
    UnsupportedPlatform(String),

    #[error("Required CLI not found: {name}")]
    DependencyMissing { name: String, hint: String },

    // Resolution errors
    #[error("Could not resolve a branch for PR #{pr}: {reason}")]
    PullRequestNotFound { pr: u64, reason: String },

    #[error("No successful '{workflow}' run found for PR #{pr} (branch {branch})")]
    NoSuccessfulRun {
        pr: u64,
        branch: String,
        workflow: String,
    },

    // Transfer errors
    #[error("Failed to download artifact '{artifact}' for {platform} from run {run_id}: {reason}")]
    ArtifactDownload {
        artifact: String,
        platform: String,
        run_id: u64,
        reason: String,
    },

    // Extraction errors
    #[error("No .vsix package found in artifact download at {0}")]
    PackageNotFound(PathBuf),

    // Install errors
    #[error("Extension install failed for {target}: {stderr}")]
    Install { target: String, stderr: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command execution error: {command}, stderr: {stderr}")]
    CommandExecution { command: String, stderr: String },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl VsixError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a command execution error
    pub fn command_exec(command: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::CommandExecution {
            command: command.into(),
            stderr: stderr.into(),
        }
    }

    /// Whether the error comes from bad or missing arguments
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Usage(_) | Self::InvalidPlatform(_))
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::DependencyMissing { hint, .. } => Some(hint.as_str()),
            Self::PullRequestNotFound { .. } => {
                Some("Check the PR number, and that `gh auth status` shows you are logged in")
            }
            Self::NoSuccessfulRun { .. } => {
                Some("Wait for CI to finish on the PR, or re-run the failed workflow")
            }
            Self::ArtifactDownload { .. } => {
                Some("Artifacts expire; check the run's artifact list with: gh run view <run-id>")
            }
            Self::Usage(_) | Self::InvalidPlatform(_) => Some("Run with --help for usage"),
            _ => None,
        }
    }
}
