//! Clean command - empty the package cache

use crate::cache::CacheStore;
use crate::cli::args::CleanArgs;
use crate::config::Config;
use crate::error::VsixResult;
use crate::ui::{self, UiContext};
use console::style;

/// Execute the clean command
pub async fn execute(args: CleanArgs, config: &Config) -> VsixResult<()> {
    let ctx = UiContext::detect();
    let store = CacheStore::new(config.cache.root());
    store.ensure_dir()?;

    if args.dry_run {
        let paths = store.entry_paths()?;
        if paths.is_empty() {
            ui::step_info(&ctx, "Cache is already empty");
            return Ok(());
        }

        println!("Would remove {} cached package(s):", paths.len());
        for path in &paths {
            println!("  {} {}", style("•").red(), path.display());
        }
        println!();
        println!("Dry run - nothing removed.");
        return Ok(());
    }

    let removed = store.clear()?;
    if removed == 0 {
        ui::step_info(&ctx, "Cache is already empty");
    } else {
        ui::step_ok_detail(
            &ctx,
            &format!("Removed {} cached package(s)", removed),
            &store.root().display().to_string(),
        );
    }

    Ok(())
}
