//! Local cache of downloaded extension packages
//!
//! # Layout
//!
//! ```text
//! <cache root>/
//!   continue-1.1.66-123.vsix
//!   continue-unknown-456.vsix
//! ```
//!
//! One file per (version, PR) pair. Re-installing the same pair replaces the
//! file in place. Files not following the naming scheme are left alone by
//! `list` and `clear`.

mod store;

pub use store::{entry_file_name, format_bytes, parse_entry_name, CacheEntry, CacheStore};
