//! Tests for the `advisory-config` crate.
//!
//! These exercise the configuration loader across default handling, file
//! discovery, and environment overrides.

use std::fs;
use std::path::{Path, PathBuf};

use serial_test::serial;
use tempfile::TempDir;

use advisory_config::{load, AppConfig};

const ENV_VARS_TO_RESET: &[&str] = &[
    "ADVISORY_CONFIG",
    "ADVISORY__DATABASE__MAX_CONNECTIONS",
    "ADVISORY__DATABASE__URL",
    "ADVISORY__HTTP__ADDRESS",
    "ADVISORY__HTTP__PORT",
];

struct TestContext {
    vars: Vec<(String, Option<String>)>,
    original_dir: Option<PathBuf>,
}

impl TestContext {
    fn new() -> Self {
        Self {
            vars: Vec::new(),
            original_dir: None,
        }
    }

    fn reset_environment(&mut self) {
        for key in ENV_VARS_TO_RESET {
            self.remove_var(key);
        }
    }

    fn set_var(&mut self, key: &str, value: impl AsRef<str>) {
        let previous = std::env::var(key).ok();
        std::env::set_var(key, value.as_ref());
        self.vars.push((key.to_string(), previous));
    }

    fn remove_var(&mut self, key: &str) {
        let previous = std::env::var(key).ok();
        std::env::remove_var(key);
        self.vars.push((key.to_string(), previous));
    }

    fn set_current_dir(&mut self, dir: &Path) {
        if self.original_dir.is_none() {
            self.original_dir =
                Some(std::env::current_dir().expect("failed to capture current directory"));
        }
        std::env::set_current_dir(dir).expect("failed to set current directory");
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some(original) = self.original_dir.take() {
            let _ = std::env::set_current_dir(original);
        }

        while let Some((key, value)) = self.vars.pop() {
            match value {
                Some(value) => std::env::set_var(&key, value),
                None => std::env::remove_var(&key),
            }
        }
    }
}

#[test]
#[serial]
fn load_uses_defaults_when_nothing_configured() {
    let mut ctx = TestContext::new();
    ctx.reset_environment();

    let empty_dir = TempDir::new().expect("create temp dir");
    ctx.set_current_dir(empty_dir.path());

    let config = load().expect("load config");
    let defaults = AppConfig::default();

    assert_eq!(config.http.address, defaults.http.address);
    assert_eq!(config.http.port, defaults.http.port);
    assert_eq!(config.database.url, defaults.database.url);
    assert_eq!(
        config.database.max_connections,
        defaults.database.max_connections
    );
}

#[test]
#[serial]
fn load_reads_file_named_via_env_var() {
    let mut ctx = TestContext::new();
    ctx.reset_environment();

    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        r#"
[http]
address = "0.0.0.0"
port = 9090

[database]
url = "sqlite://custom/advisory.db"
max_connections = 3
"#,
    )
    .expect("write config file");

    ctx.set_var("ADVISORY_CONFIG", path.to_string_lossy());

    let config = load().expect("load config");
    assert_eq!(config.http.address, "0.0.0.0");
    assert_eq!(config.http.port, 9090);
    assert_eq!(config.database.url, "sqlite://custom/advisory.db");
    assert_eq!(config.database.max_connections, 3);
}

#[test]
#[serial]
fn load_discovers_file_in_working_directory() {
    let mut ctx = TestContext::new();
    ctx.reset_environment();

    let dir = TempDir::new().expect("create temp dir");
    fs::write(
        dir.path().join("advisory.toml"),
        r#"
[http]
port = 8181
"#,
    )
    .expect("write config file");
    ctx.set_current_dir(dir.path());

    let config = load().expect("load config");
    assert_eq!(config.http.port, 8181);
    assert_eq!(config.http.address, AppConfig::default().http.address);
}

#[test]
#[serial]
fn environment_overrides_beat_file_values() {
    let mut ctx = TestContext::new();
    ctx.reset_environment();

    let dir = TempDir::new().expect("create temp dir");
    fs::write(
        dir.path().join("advisory.toml"),
        r#"
[database]
url = "sqlite://from-file.db"
"#,
    )
    .expect("write config file");
    ctx.set_current_dir(dir.path());
    ctx.set_var("ADVISORY__DATABASE__URL", "sqlite://from-env.db");
    ctx.set_var("ADVISORY__HTTP__PORT", "7171");

    let config = load().expect("load config");
    assert_eq!(config.database.url, "sqlite://from-env.db");
    assert_eq!(config.http.port, 7171);
}
