//! End-to-end tests for `colorvein config` commands.

mod fixtures;
use fixtures::*;

use std::path::Path;

fn show_json(config_dir: &Path) -> serde_json::Value {
    let output = isolated_command(&["config", "show", "--json"], config_dir)
        .output()
        .expect("Failed to execute command");
    assert_success(&output);
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

fn set(args: &[&str], config_dir: &Path) -> std::process::Output {
    let mut full = vec!["config", "set"];
    full.extend_from_slice(args);
    isolated_command(&full, config_dir)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_config_show_defaults() {
    let config_dir = temp_dir();
    let result = show_json(config_dir.path());

    assert_eq!(result["ui"]["theme"], "auto");
    assert_eq!(result["ui"]["locale"], "zh");
    assert_eq!(result["ui"]["lens"], "hue");
    assert_eq!(result["ui"]["neutral_mode"], false);
    assert_eq!(result["viewport"]["width"], 1200);
    assert_eq!(result["viewport"]["height"], 800);
    assert_eq!(result["export"]["format"], "json");
    assert!(result["path"]
        .as_str()
        .unwrap()
        .ends_with("config.toml"));
}

#[test]
fn test_config_show_human_readable() {
    let config_dir = temp_dir();
    let output = isolated_command(&["config", "show"], config_dir.path())
        .output()
        .unwrap();
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Color Vein Configuration"));
    assert!(stdout.contains("Default Lens: hue"));
}

#[test]
fn test_config_set_persists() {
    let config_dir = temp_dir();
    let output = set(
        &[
            "--theme", "dark", "--locale", "en", "--lens", "dynasty", "--neutral", "true",
            "--export-format", "css",
        ],
        config_dir.path(),
    );
    assert_success(&output);
    assert!(config_dir.path().join("config.toml").exists());

    let result = show_json(config_dir.path());
    assert_eq!(result["ui"]["theme"], "dark");
    assert_eq!(result["ui"]["locale"], "en");
    assert_eq!(result["ui"]["lens"], "dynasty");
    assert_eq!(result["ui"]["neutral_mode"], true);
    assert_eq!(result["export"]["format"], "css");
}

#[test]
fn test_config_set_export_dir_creates_directory() {
    let config_dir = temp_dir();
    let export_dir = config_dir.path().join("palettes");
    let output = set(&["--export-dir", export_dir.to_str().unwrap()], config_dir.path());
    assert_success(&output);
    assert!(export_dir.is_dir());

    let result = show_json(config_dir.path());
    assert_eq!(result["export"]["output_dir"], export_dir.to_str().unwrap());
}

#[test]
fn test_config_set_requires_an_option() {
    let config_dir = temp_dir();
    let output = set(&[], config_dir.path());
    assert_eq!(output.status.code(), Some(1));
    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let config_dir = temp_dir();
    for args in [
        ["--theme", "purple"],
        ["--locale", "fr"],
        ["--lens", "sideways"],
        ["--export-format", "pdf"],
        ["--width", "0"],
    ] {
        let output = set(&args, config_dir.path());
        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
    }
    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_show_rejects_corrupt_file() {
    let config_dir = temp_dir();
    std::fs::write(config_dir.path().join("config.toml"), "[ui\nlocale = ").unwrap();
    let output = isolated_command(&["config", "show"], config_dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
}
