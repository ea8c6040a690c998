//! vsix-pr - install extension builds from pull requests
//!
//! Resolves a pull request to its latest successful CI run, downloads the
//! platform's packaged extension, caches it and installs it into the editor.

pub mod cache;
pub mod ci;
pub mod cli;
pub mod config;
pub mod deps;
pub mod editor;
pub mod error;
pub mod package;
pub mod platform;
pub mod ui;

pub use error::{VsixError, VsixResult};
