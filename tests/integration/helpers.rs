//! Shared helpers for integration tests.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Directory holding the JSON fixtures.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

/// Absolute path of a fixture file.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

/// Copy a fixture into a fresh temp dir. The dir is removed when dropped.
#[allow(dead_code)]
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let dest = dir.path().join(name);
    std::fs::copy(fixture(name), &dest).expect("Failed to copy fixture");
    (dir, dest)
}

/// Run the shotsync binary with an isolated config and capture its output.
pub fn run_shotsync(args: &[&str]) -> (String, String, i32) {
    run_shotsync_with_config(args, None)
}

/// Like [`run_shotsync`], with `config` written to the isolated config file.
pub fn run_shotsync_with_config(args: &[&str], config: Option<&str>) -> (String, String, i32) {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = config_dir.path().join("config.toml");
    if let Some(contents) = config {
        std::fs::write(&config_path, contents).expect("Failed to write config");
    }

    let output = Command::new(env!("CARGO_BIN_EXE_shotsync"))
        .args(args)
        .arg("--config")
        .arg(&config_path)
        .env_remove("SHOTSYNC_LOG")
        .output()
        .expect("Failed to execute shotsync");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
