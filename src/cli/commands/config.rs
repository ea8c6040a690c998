//! Config command - show or edit configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::{VsixError, VsixResult};
use crate::ui::{self, UiContext};
use std::path::PathBuf;

/// Keys accepted by `config set`
const VALID_KEYS: &[&str] = &[
    "github.repo",
    "github.workflow",
    "github.artifact_prefix",
    "editor.command",
    "editor.marketplace_id",
    "cache.dir",
];

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    manager: &ConfigManager,
    config: &Config,
) -> VsixResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => println!("{}", manager.path().display()),
        Some(ConfigAction::Init { force }) => init_config(manager, force).await?,
        Some(ConfigAction::Set { key, value }) => {
            let ctx = UiContext::detect();
            let mut config = config.clone();
            apply_value(&mut config, &key, &value)?;
            manager.save(&config).await?;
            ui::step_ok(&ctx, &format!("Set {} = {}", key, value));
        }
    }

    Ok(())
}

fn show_config(config: &Config) -> VsixResult<()> {
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

async fn init_config(manager: &ConfigManager, force: bool) -> VsixResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path();

    if path.exists() && !force {
        ui::step_warn_hint(
            &ctx,
            &format!("Config already exists at {}", path.display()),
            "Use --force to overwrite",
        );
        return Ok(());
    }

    manager.save(&Config::default()).await?;
    ui::step_ok_detail(&ctx, "Configuration initialized", &path.display().to_string());

    Ok(())
}

/// Set a dot-separated key on `config`
fn apply_value(config: &mut Config, key: &str, value: &str) -> VsixResult<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["github", "repo"] => {
            if !value.contains('/') {
                return Err(VsixError::Usage(format!(
                    "github.repo must be in owner/name form, got '{}'",
                    value
                )));
            }
            config.github.repo = value.to_string();
        }
        ["github", "workflow"] => config.github.workflow = value.to_string(),
        ["github", "artifact_prefix"] => config.github.artifact_prefix = value.to_string(),
        ["editor", "command"] => config.editor.command = value.to_string(),
        ["editor", "marketplace_id"] => config.editor.marketplace_id = value.to_string(),
        ["cache", "dir"] => {
            config.cache.dir = (!value.is_empty()).then(|| PathBuf::from(value));
        }
        _ => {
            return Err(VsixError::Usage(format!(
                "Unknown config key: {}. Valid keys: {}",
                key,
                VALID_KEYS.join(", ")
            )))
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn apply_known_keys() {
        let mut config = Config::default();
        apply_value(&mut config, "editor.command", "cursor").unwrap();
        apply_value(&mut config, "github.repo", "acme/ext").unwrap();
        apply_value(&mut config, "cache.dir", "/tmp/vsix").unwrap();

        assert_eq!(config.editor.command, "cursor");
        assert_eq!(config.github.repo, "acme/ext");
        assert_eq!(config.cache.dir, Some(PathBuf::from("/tmp/vsix")));

        // Empty value resets to the default location
        apply_value(&mut config, "cache.dir", "").unwrap();
        assert!(config.cache.dir.is_none());
    }

    #[test]
    fn apply_rejects_unknown_key() {
        let mut config = Config::default();
        let err = apply_value(&mut config, "vm.name", "x").unwrap_err();
        assert!(err.to_string().contains("Unknown config key"));
    }

    #[test]
    fn apply_rejects_malformed_repo() {
        let mut config = Config::default();
        assert!(apply_value(&mut config, "github.repo", "continue").is_err());
        assert_eq!(config.github.repo, "continuedev/continue");
    }

    #[tokio::test]
    async fn set_persists_value() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp.path().join("config.toml"));

        let args = ConfigArgs {
            action: Some(ConfigAction::Set {
                key: "github.workflow".to_string(),
                value: "preview.yaml".to_string(),
            }),
        };
        execute(args, &manager, &Config::default()).await.unwrap();

        let loaded = manager.load().await.unwrap();
        assert_eq!(loaded.github.workflow, "preview.yaml");
    }
}
