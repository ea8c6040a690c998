//! Filesystem-backed package cache
//!
//! Entries are named `continue-{version}-{pr}.vsix`, so the path of an entry
//! depends only on its (version, pr) pair.

use crate::error::{VsixError, VsixResult};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const ENTRY_PREFIX: &str = "continue-";
const ENTRY_SUFFIX: &str = ".vsix";

/// A cached package file
#[derive(Debug, Clone, Serialize)]
pub struct CacheEntry {
    pub path: PathBuf,
    pub version: String,
    pub pr: u64,
    pub size_bytes: u64,
    pub modified: Option<DateTime<Utc>>,
}

/// File name for a cached package
pub fn entry_file_name(version: &str, pr: u64) -> String {
    format!("{ENTRY_PREFIX}{version}-{pr}{ENTRY_SUFFIX}")
}

/// Split a cache file name back into (version, pr)
///
/// The PR is everything after the last `-`, so versions may contain dashes.
pub fn parse_entry_name(file_name: &str) -> Option<(&str, u64)> {
    let stem = file_name
        .strip_prefix(ENTRY_PREFIX)?
        .strip_suffix(ENTRY_SUFFIX)?;
    let (version, pr) = stem.rsplit_once('-')?;
    if version.is_empty() {
        return None;
    }
    Some((version, pr.parse().ok()?))
}

/// Package cache rooted at a directory
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the cache directory if it doesn't exist yet
    pub fn ensure_dir(&self) -> VsixResult<()> {
        fs::create_dir_all(&self.root).map_err(|e| {
            VsixError::io(format!("creating cache directory {}", self.root.display()), e)
        })
    }

    /// Path an entry for (version, pr) lives at
    pub fn entry_path(&self, version: &str, pr: u64) -> PathBuf {
        self.root.join(entry_file_name(version, pr))
    }

    /// Move `source` into the cache as the entry for (version, pr)
    ///
    /// An existing entry is overwritten with a warning.
    pub fn put(&self, source: &Path, version: &str, pr: u64) -> VsixResult<PathBuf> {
        self.ensure_dir()?;
        let target = self.entry_path(version, pr);

        if target.exists() {
            warn!("Overwriting cached package {}", target.display());
        }

        move_file(source, &target)?;
        info!("Cached {} as {}", source.display(), target.display());
        Ok(target)
    }

    /// All cached package entries, ordered by PR then version
    pub fn list(&self) -> VsixResult<Vec<CacheEntry>> {
        let mut entries: Vec<CacheEntry> = self
            .entry_paths()?
            .into_iter()
            .filter_map(|path| {
                let name = path.file_name()?.to_str()?;
                let (version, pr) = parse_entry_name(name)?;
                let meta = fs::metadata(&path).ok();
                Some(CacheEntry {
                    version: version.to_string(),
                    pr,
                    size_bytes: meta.as_ref().map(|m| m.len()).unwrap_or(0),
                    modified: meta
                        .and_then(|m| m.modified().ok())
                        .map(DateTime::<Utc>::from),
                    path,
                })
            })
            .collect();

        entries.sort_by(|a, b| {
            a.pr.cmp(&b.pr)
                .then_with(|| compare_versions(&a.version, &b.version))
        });
        Ok(entries)
    }

    /// Remove all cached package entries, returning how many were removed
    ///
    /// A missing or empty cache directory removes nothing.
    pub fn clear(&self) -> VsixResult<usize> {
        let mut removed = 0;
        for path in self.entry_paths()? {
            debug!("Removing cached package: {}", path.display());
            fs::remove_file(&path)
                .map_err(|e| VsixError::io(format!("removing {}", path.display()), e))?;
            removed += 1;
        }
        Ok(removed)
    }

    /// Paths of files in the root that follow the entry naming scheme
    pub fn entry_paths(&self) -> VsixResult<Vec<PathBuf>> {
        let read_dir = match fs::read_dir(&self.root) {
            Ok(rd) => rd,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(VsixError::io(
                    format!("reading cache directory {}", self.root.display()),
                    e,
                ))
            }
        };

        let mut paths: Vec<PathBuf> = read_dir
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| parse_entry_name(n).is_some())
            })
            .collect();
        paths.sort();
        Ok(paths)
    }
}

/// Rename, falling back to copy + delete when source and target are on
/// different filesystems.
fn move_file(source: &Path, target: &Path) -> VsixResult<()> {
    if fs::rename(source, target).is_ok() {
        return Ok(());
    }

    fs::copy(source, target).map_err(|e| {
        VsixError::io(
            format!("moving {} to {}", source.display(), target.display()),
            e,
        )
    })?;
    fs::remove_file(source)
        .map_err(|e| VsixError::io(format!("removing {}", source.display()), e))
}

/// Semver order when both sides parse, plain string order otherwise
fn compare_versions(a: &str, b: &str) -> Ordering {
    match (semver::Version::parse(a), semver::Version::parse(b)) {
        (Ok(va), Ok(vb)) => va.cmp(&vb),
        _ => a.cmp(b),
    }
}

/// Format bytes as human-readable size (e.g., "1.5 MB")
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
