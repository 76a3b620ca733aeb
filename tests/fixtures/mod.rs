//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use colorvein::models::TraditionalColor;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the colorvein binary
pub fn colorvein_bin() -> String {
    std::env::var("CARGO_BIN_EXE_colorvein")
        .unwrap_or_else(|_| "target/debug/colorvein".to_string())
}

/// Creates a Command with an isolated config directory.
///
/// Pass the same directory to several commands to share configuration.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(colorvein_bin());
    cmd.env("COLORVEIN_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs the binary with a fresh, empty config directory.
pub fn run(args: &[&str]) -> Output {
    let config_dir = temp_dir();
    isolated_command(args, config_dir.path())
        .output()
        .expect("Failed to execute command")
}

/// Runs the binary and parses stdout as JSON, asserting success.
pub fn run_json(args: &[&str]) -> serde_json::Value {
    let output = run(args);
    assert_success(&output);
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

/// Asserts exit code 0, showing stderr on failure.
pub fn assert_success(output: &Output) {
    assert_eq!(
        output.status.code(),
        Some(0),
        "Command should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Creates a temporary directory.
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Builds a color from hex with dynasty and mood tags.
pub fn test_color(id: &str, name: &str, hex: &str, dynasty: &str, mood: &str) -> TraditionalColor {
    let mut color = TraditionalColor::from_hex(id, name, hex).expect("valid hex");
    color.pinyin = id.replace('-', " ");
    if !dynasty.is_empty() {
        color.dynasties = vec![dynasty.to_string()];
    }
    if !mood.is_empty() {
        color.moods = vec![mood.to_string()];
    }
    color
}

/// A five-color dataset spanning several families, dynasties and moods.
pub fn small_dataset() -> Vec<TraditionalColor> {
    vec![
        test_color("zhu-hong", "朱红", "#FF461F", "唐", "喜庆"),
        test_color("teng-huang", "藤黄", "#FFB61E", "宋", "雅致"),
        test_color("song-lv", "松绿", "#057748", "明", "天然"),
        test_color("dian-qing", "靛青", "#1E3A8A", "清", "深沉"),
        test_color("yue-bai", "月白", "#D6ECF0", "宋", "空灵"),
    ]
}

/// Writes colors as a dataset JSON file and returns its path.
pub fn write_dataset(dir: &TempDir, colors: &[TraditionalColor]) -> PathBuf {
    let path = dir.path().join("colors.json");
    let json = serde_json::to_string_pretty(colors).expect("serialize dataset");
    fs::write(&path, json).expect("write dataset");
    path
}
