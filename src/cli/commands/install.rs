//! Install command - install a PR build or the latest pre-release

use crate::cache::CacheStore;
use crate::ci::{fetch_artifact, locate_run, resolve_branch, CiClient, GhCli};
use crate::cli::args::InstallArgs;
use crate::config::schema::GithubConfig;
use crate::config::Config;
use crate::deps::{self, Dependency};
use crate::editor::{EditorCli, ExtensionHost};
use crate::error::{VsixError, VsixResult};
use crate::package;
use crate::platform::Platform;
use crate::ui::{self, TaskSpinner, UiContext};
use std::path::PathBuf;
use tracing::{debug, info};

/// Result of installing a PR build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrInstallOutcome {
    pub branch: String,
    pub run_id: u64,
    pub version: String,
    pub cached: PathBuf,
}

/// Execute the install command
pub async fn execute(args: InstallArgs, config: &Config) -> VsixResult<()> {
    match (args.pr, args.latest) {
        (Some(pr), _) => {
            install_pr_command(pr, args.platform.as_deref(), args.no_install, config).await
        }
        (None, true) => install_latest_command(config).await,
        (None, false) => Err(VsixError::Usage(
            "install requires --pr <number> or --latest".to_string(),
        )),
    }
}

async fn install_pr_command(
    pr: u64,
    platform: Option<&str>,
    no_install: bool,
    config: &Config,
) -> VsixResult<()> {
    // Resolve first: a bad platform must fail before any other work
    let platform = Platform::resolve(platform)?;
    debug!("Target platform: {}", platform);

    let mut required = vec![Dependency::gh()];
    if !no_install {
        required.push(Dependency::editor(&config.editor.command));
    }
    deps::ensure_installed(&required).await?;

    let cache = CacheStore::new(config.cache.root());
    cache.ensure_dir()?;

    let ci = GhCli::new(&config.github);
    let editor = EditorCli::new(&config.editor);
    let host: Option<&dyn ExtensionHost> = if no_install { None } else { Some(&editor) };

    let ctx = UiContext::detect();
    let mut spinner = TaskSpinner::new(&ctx);
    spinner.start(&format!("Fetching {} build of PR #{}...", platform, pr));

    match install_pr(pr, platform, &config.github, &ci, host, &cache).await {
        Ok(outcome) => {
            spinner.stop(&format!(
                "PR #{} ({}, run {}) version {}",
                pr, outcome.branch, outcome.run_id, outcome.version
            ));
            ui::step_ok_detail(&ctx, "Cached", &outcome.cached.display().to_string());
            if no_install {
                ui::outro_success(&ctx, "Downloaded (install skipped)");
            } else {
                ui::outro_success(&ctx, &format!("Installed into {}", config.editor.command));
            }
            Ok(())
        }
        Err(e) => {
            spinner.stop_error(&format!("Failed to install PR #{}", pr));
            Err(e)
        }
    }
}

async fn install_latest_command(config: &Config) -> VsixResult<()> {
    deps::ensure_installed(&[Dependency::editor(&config.editor.command)]).await?;

    let editor = EditorCli::new(&config.editor);
    let ctx = UiContext::detect();
    let mut spinner = TaskSpinner::new(&ctx);
    spinner.start(&format!(
        "Installing latest pre-release of {}...",
        config.editor.marketplace_id
    ));

    match install_latest(&editor, &config.editor.marketplace_id).await {
        Ok(()) => {
            spinner.stop(&format!(
                "Installed latest pre-release of {}",
                config.editor.marketplace_id
            ));
            Ok(())
        }
        Err(e) => {
            spinner.stop_error("Pre-release install failed");
            Err(e)
        }
    }
}

/// Resolve, download, cache and (optionally) install the CI build of a PR
///
/// With `host` set to `None` the package is cached but not installed.
pub async fn install_pr(
    pr: u64,
    platform: Platform,
    github: &GithubConfig,
    ci: &dyn CiClient,
    host: Option<&dyn ExtensionHost>,
    cache: &CacheStore,
) -> VsixResult<PrInstallOutcome> {
    let branch = resolve_branch(ci, pr).await?;
    let run_id = locate_run(ci, &branch, &github.workflow, pr).await?;

    let artifact_name = platform.artifact_name(&github.artifact_prefix);
    let artifact = fetch_artifact(ci, run_id, &artifact_name, platform).await?;

    let stored = package::extract(artifact.path()).and_then(|pkg| {
        let cached = cache.put(&pkg.source_path, &pkg.version, pr)?;
        Ok((pkg.version, cached))
    });
    artifact.close();
    let (version, cached) = stored?;

    if let Some(host) = host {
        info!("Installing {} with {}", cached.display(), host.host_name());
        host.install_from_path(&cached).await?;
    }

    Ok(PrInstallOutcome {
        branch,
        run_id,
        version,
        cached,
    })
}

/// Install the latest marketplace pre-release
pub async fn install_latest(host: &dyn ExtensionHost, marketplace_id: &str) -> VsixResult<()> {
    info!("Installing pre-release {} with {}", marketplace_id, host.host_name());
    host.install_prerelease(marketplace_id).await
}
