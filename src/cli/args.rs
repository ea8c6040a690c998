//! CLI argument definitions using clap derive

use clap::{ArgAction, ArgGroup, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// vsix-pr - install extension builds from pull requests
///
/// Downloads the packaged extension built by CI for a pull request,
/// caches it locally and installs it into the editor. Can also install
/// the latest marketplace pre-release.
#[derive(Parser, Debug)]
#[command(name = "vsix-pr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "VSIX_PR_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install a PR build or the latest pre-release
    Install(InstallArgs),

    /// Remove all cached packages
    Clean(CleanArgs),

    /// List cached packages
    List(ListArgs),

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["pr", "latest"])))]
pub struct InstallArgs {
    /// Pull request number whose CI build to install
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub pr: Option<u64>,

    /// Install the latest marketplace pre-release
    #[arg(long)]
    pub latest: bool,

    /// Artifact platform: macos or linux (defaults to the host OS)
    #[arg(long, requires = "pr", conflicts_with = "latest")]
    pub platform: Option<String>,

    /// Download and cache the package without installing it
    #[arg(long, requires = "pr", conflicts_with = "latest")]
    pub no_install: bool,
}

/// Arguments for the clean command
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// Show what would be removed without deleting anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write the default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., editor.command)
        key: String,
        /// Value to set
        value: String,
    },
}

/// Output format for the list command
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one path per line)
    Plain,
}
