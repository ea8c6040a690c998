//! Target platform resolution
//!
//! A platform is either given explicitly on the command line or detected
//! from the host OS. It selects which CI artifact gets downloaded.

use crate::error::{VsixError, VsixResult};
use std::fmt;
use std::str::FromStr;

/// Platform an extension build targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Linux,
}

impl Platform {
    /// Resolve the platform from an explicit override, or detect it from the host
    pub fn resolve(explicit: Option<&str>) -> VsixResult<Self> {
        match explicit {
            Some(value) => value.parse(),
            None => Self::from_host_os(std::env::consts::OS),
        }
    }

    /// Map a host OS identifier (as in `std::env::consts::OS`) to a platform
    pub fn from_host_os(os: &str) -> VsixResult<Self> {
        match os {
            "macos" | "darwin" | "ios" => Ok(Platform::MacOS),
            "linux" => Ok(Platform::Linux),
            other => Err(VsixError::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Identifier used on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Platform::MacOS => "macos",
            Platform::Linux => "linux",
        }
    }

    /// Suffix CI appends to the artifact name for this platform
    pub fn artifact_suffix(&self) -> &'static str {
        match self {
            Platform::MacOS => "macOS",
            Platform::Linux => "Linux",
        }
    }

    /// Full artifact name for a given prefix
    pub fn artifact_name(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.artifact_suffix())
    }
}

impl FromStr for Platform {
    type Err = VsixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "macos" => Ok(Platform::MacOS),
            "linux" => Ok(Platform::Linux),
            other => Err(VsixError::InvalidPlatform(other.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        assert_eq!(Platform::resolve(Some("linux")).unwrap(), Platform::Linux);
        assert_eq!(Platform::resolve(Some("macos")).unwrap(), Platform::MacOS);
    }

    #[test]
    fn invalid_override_is_usage_error() {
        for bad in ["windows", "Linux", "", "mac"] {
            let err = Platform::resolve(Some(bad)).unwrap_err();
            assert!(matches!(err, VsixError::InvalidPlatform(ref v) if v == bad));
        }
    }

    #[test]
    fn host_detection() {
        assert_eq!(Platform::from_host_os("macos").unwrap(), Platform::MacOS);
        assert_eq!(Platform::from_host_os("darwin").unwrap(), Platform::MacOS);
        assert_eq!(Platform::from_host_os("linux").unwrap(), Platform::Linux);
        assert!(matches!(
            Platform::from_host_os("windows"),
            Err(VsixError::UnsupportedPlatform(_))
        ));
    }

    #[test]
    fn artifact_names() {
        let prefix = "vscode-extension-build-";
        assert_eq!(
            Platform::MacOS.artifact_name(prefix),
            "vscode-extension-build-macOS"
        );
        assert_eq!(
            Platform::Linux.artifact_name(prefix),
            "vscode-extension-build-Linux"
        );
    }

    #[test]
    fn detect_on_supported_host() {
        let result = Platform::resolve(None);
        match std::env::consts::OS {
            "macos" | "linux" => assert!(result.is_ok()),
            _ => assert!(result.is_err()),
        }
    }
}
