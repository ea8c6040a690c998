//! Integration tests for vsix-pr

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn vsix_pr() -> Command {
        cargo_bin_cmd!("vsix-pr")
    }

    /// Write a config pointing the cache at `<temp>/cache`
    fn temp_config(temp: &TempDir) -> (PathBuf, PathBuf) {
        let cache = temp.path().join("cache");
        let config = temp.path().join("config.toml");
        fs::write(&config, format!("[cache]\ndir = {:?}\n", cache.display().to_string())).unwrap();
        (config, cache)
    }

    fn seed(cache: &Path, names: &[&str]) {
        fs::create_dir_all(cache).unwrap();
        for name in names {
            fs::write(cache.join(name), "pk").unwrap();
        }
    }

    #[test]
    fn help_displays() {
        vsix_pr()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("pull requests"));
    }

    #[test]
    fn version_displays() {
        vsix_pr()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("vsix-pr"));
    }

    #[test]
    fn unknown_command_exits_one() {
        vsix_pr().arg("frobnicate").assert().code(1);
    }

    #[test]
    fn missing_command_exits_one() {
        vsix_pr().assert().code(1);
    }

    #[test]
    fn install_without_source_exits_one() {
        vsix_pr()
            .arg("install")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("--pr"));
    }

    #[test]
    fn invalid_platform_fails_without_side_effects() {
        let temp = TempDir::new().unwrap();
        let (config, cache) = temp_config(&temp);

        vsix_pr()
            .args(["install", "--pr", "123", "--platform", "windows"])
            .env("VSIX_PR_CONFIG", &config)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid platform: windows"))
            .stderr(predicate::str::contains("Usage:"));

        assert!(!cache.exists());
    }

    #[test]
    fn latest_rejects_pr_only_flags() {
        let temp = TempDir::new().unwrap();
        let (config, cache) = temp_config(&temp);

        let cases: [&[&str]; 2] = [
            &["install", "--latest", "--no-install"],
            &["install", "--latest", "--platform", "linux"],
        ];
        for args in cases {
            vsix_pr()
                .args(args)
                .env("VSIX_PR_CONFIG", &config)
                .assert()
                .code(1)
                .stderr(predicate::str::contains("Usage:"));
        }

        assert!(!cache.exists());
    }

    #[test]
    fn clean_removes_only_cached_packages() {
        let temp = TempDir::new().unwrap();
        let (config, cache) = temp_config(&temp);
        seed(
            &cache,
            &[
                "continue-1.0.0-1.vsix",
                "continue-1.0.1-2.vsix",
                "continue-unknown-3.vsix",
                "README.txt",
            ],
        );

        vsix_pr()
            .arg("clean")
            .env("VSIX_PR_CONFIG", &config)
            .assert()
            .success()
            .stdout(predicate::str::contains("Removed 3"));

        assert!(cache.join("README.txt").exists());
        assert!(!cache.join("continue-1.0.0-1.vsix").exists());
    }

    #[test]
    fn clean_empty_cache_succeeds() {
        let temp = TempDir::new().unwrap();
        let (config, cache) = temp_config(&temp);

        vsix_pr()
            .arg("clean")
            .env("VSIX_PR_CONFIG", &config)
            .assert()
            .success()
            .stdout(predicate::str::contains("already empty"));

        assert!(cache.is_dir());
    }

    #[test]
    fn list_plain_prints_paths() {
        let temp = TempDir::new().unwrap();
        let (config, cache) = temp_config(&temp);
        seed(&cache, &["continue-2.0.0-123.vsix", "notes.txt"]);

        vsix_pr()
            .args(["list", "--format", "plain"])
            .env("VSIX_PR_CONFIG", &config)
            .assert()
            .success()
            .stdout(predicate::str::contains("continue-2.0.0-123.vsix"))
            .stdout(predicate::str::contains("notes.txt").not());
    }

    #[test]
    fn config_path_uses_override() {
        let temp = TempDir::new().unwrap();
        let (config, _) = temp_config(&temp);

        vsix_pr()
            .args(["config", "path"])
            .env("VSIX_PR_CONFIG", &config)
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show() {
        let temp = TempDir::new().unwrap();
        let (config, _) = temp_config(&temp);

        vsix_pr()
            .args(["config", "show"])
            .env("VSIX_PR_CONFIG", &config)
            .assert()
            .success()
            .stdout(predicate::str::contains("[github]"))
            .stdout(predicate::str::contains("continuedev/continue"));
    }

    #[test]
    fn install_help() {
        vsix_pr()
            .args(["install", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--latest"));
    }
}
