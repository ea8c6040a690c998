//! List command - show cached packages

use crate::cache::{format_bytes, CacheEntry, CacheStore};
use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::VsixResult;
use crate::ui::{self, UiContext};
use console::style;

/// Execute the list command
pub async fn execute(args: ListArgs, config: &Config) -> VsixResult<()> {
    let store = CacheStore::new(config.cache.root());
    store.ensure_dir()?;
    let entries = store.list()?;

    if entries.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => {
                let ctx = UiContext::detect();
                ui::step_info(&ctx, "No cached packages");
            }
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&entries),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Plain => {
            for entry in &entries {
                println!("{}", entry.path.display());
            }
        }
    }

    Ok(())
}

fn print_table(entries: &[CacheEntry]) {
    println!(
        "{:<8} {:<16} {:<10} {:<17} {}",
        style("PR").bold(),
        style("VERSION").bold(),
        style("SIZE").bold(),
        style("CACHED").bold(),
        style("FILE").bold()
    );
    println!("{}", "-".repeat(80));

    for entry in entries {
        let cached = entry
            .modified
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let file = entry
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let version = if entry.version == crate::package::UNKNOWN_VERSION {
            style(entry.version.clone()).yellow()
        } else {
            style(entry.version.clone())
        };

        println!(
            "{:<8} {:<16} {:<10} {:<17} {}",
            format!("#{}", entry.pr),
            version,
            format_bytes(entry.size_bytes),
            cached,
            file
        );
    }

    println!();
    println!("{} package(s)", entries.len());
}
