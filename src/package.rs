//! Locating the `.vsix` package inside a downloaded artifact
//!
//! CI uploads the package as `continue-<version>.vsix`. The version is read
//! back from that filename; a filename that doesn't follow the pattern is
//! still installable and gets the version `unknown`.

use crate::error::{VsixError, VsixResult};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extension of installable package files
pub const PACKAGE_EXTENSION: &str = "vsix";

/// Version used when the filename carries none
pub const UNKNOWN_VERSION: &str = "unknown";

const FILE_PREFIX: &str = "continue-";
const FILE_SUFFIX: &str = ".vsix";

/// An installable package found in an artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub source_path: PathBuf,
    pub version: String,
}

/// Version embedded in a `continue-<version>.vsix` filename
pub fn parse_version(file_name: &str) -> Option<&str> {
    let version = file_name
        .strip_prefix(FILE_PREFIX)?
        .strip_suffix(FILE_SUFFIX)?;
    (!version.is_empty()).then_some(version)
}

/// Like [`parse_version`], falling back to [`UNKNOWN_VERSION`]
pub fn version_or_unknown(file_name: &str) -> String {
    parse_version(file_name)
        .unwrap_or(UNKNOWN_VERSION)
        .to_string()
}

/// Find the package in `dir` and derive its version
pub fn extract(dir: &Path) -> VsixResult<Package> {
    let source_path = find_package(dir)?;
    let file_name = source_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    if parse_version(&file_name).is_none() {
        warn!(
            "Could not parse a version from '{}'; using '{}'",
            file_name, UNKNOWN_VERSION
        );
    }
    let version = version_or_unknown(&file_name);
    debug!("Found package {} (version {})", source_path.display(), version);

    Ok(Package {
        source_path,
        version,
    })
}

/// First `.vsix` file under `dir`, breadth-first with entries in name order
///
/// Symlinked directories are not descended into.
pub fn find_package(dir: &Path) -> VsixResult<PathBuf> {
    let mut pending = VecDeque::from([dir.to_path_buf()]);

    while let Some(current) = pending.pop_front() {
        let reading = || format!("reading {}", current.display());
        let mut entries = Vec::new();
        for entry in fs::read_dir(&current).map_err(|e| VsixError::io(reading(), e))? {
            let entry = entry.map_err(|e| VsixError::io(reading(), e))?;
            let file_type = entry
                .file_type()
                .map_err(|e| VsixError::io(format!("inspecting {}", entry.path().display()), e))?;
            entries.push((entry.path(), file_type));
        }
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        for (path, file_type) in entries {
            if file_type.is_dir() {
                pending.push_back(path);
            } else if is_package(&path) {
                return Ok(path);
            }
        }
    }

    Err(VsixError::PackageNotFound(dir.to_path_buf()))
}

fn is_package(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PACKAGE_EXTENSION))
}
