//! End-to-end tests for `colorvein show`.

mod fixtures;
use fixtures::*;

#[test]
fn test_show_json_has_full_record() {
    let result = run_json(&["show", "da-hong", "--json"]);

    assert_eq!(result["id"], "da-hong");
    assert_eq!(result["name"], "大红");
    assert_eq!(result["hex"], "#C3272B");
    assert_eq!(result["rgb"], serde_json::json!([195, 39, 43]));
    assert_eq!(result["family"], "red");
    assert!(result["contrast_text"].is_string());

    let similar = result["similar"].as_array().unwrap();
    assert_eq!(similar.len(), 4);
    assert!(similar.iter().all(|s| s["id"] != "da-hong"));
}

#[test]
fn test_show_similar_count() {
    let result = run_json(&["show", "yue-bai", "--similar", "2", "--json"]);
    assert_eq!(result["similar"].as_array().unwrap().len(), 2);
}

#[test]
fn test_show_similar_nearest_first() {
    let dir = temp_dir();
    let dataset = write_dataset(&dir, &small_dataset());
    let result = run_json(&[
        "show", "zhu-hong", "--dataset", dataset.to_str().unwrap(), "--json",
    ]);
    assert_eq!(result["similar"][0]["id"], "teng-huang");
}

#[test]
fn test_show_human_output_localized() {
    let output = run(&["show", "da-hong", "--locale", "en"]);
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("大红 (dà hóng)"));
    assert!(stdout.contains("The true red of Ming and Qing"));
    assert!(stdout.contains("Similar:"));

    let output = run(&["show", "da-hong"]);
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("明清礼服"));
}

#[test]
fn test_show_unknown_color_is_not_found() {
    let output = run(&["show", "no-such-color"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("no-such-color"));
}

#[test]
fn test_show_bad_locale() {
    let output = run(&["show", "da-hong", "--locale", "fr"]);
    assert_eq!(output.status.code(), Some(1));
}
