//! vsix-pr - install extension builds from pull requests
//!
//! CLI entry point that dispatches to subcommands.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use console::style;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vsix_pr::cli::{Cli, Commands};
use vsix_pr::config::ConfigManager;
use vsix_pr::error::VsixResult;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and succeed; every usage error exits 1
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if e.is_usage() {
                eprintln!("\n{}", Cli::command().render_usage());
            }
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> VsixResult<()> {
    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("vsix_pr=warn"),
        1 => EnvFilter::new("vsix_pr=info"),
        _ => EnvFilter::new("vsix_pr=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    vsix_pr::ui::init_theme();

    let config_manager = match cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };
    let config = config_manager.load().await?;

    match cli.command {
        Commands::Install(args) => vsix_pr::cli::commands::install(args, &config).await,
        Commands::Clean(args) => vsix_pr::cli::commands::clean(args, &config).await,
        Commands::List(args) => vsix_pr::cli::commands::list(args, &config).await,
        Commands::Config(args) => {
            vsix_pr::cli::commands::config(args, &config_manager, &config).await
        }
    }
}
