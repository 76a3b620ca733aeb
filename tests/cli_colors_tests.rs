//! End-to-end tests for `colorvein colors`.

mod fixtures;
use fixtures::*;

fn ids(result: &serde_json::Value) -> Vec<String> {
    result["colors"]
        .as_array()
        .expect("colors array")
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_colors_lists_bundled_dataset() {
    let result = run_json(&["colors", "--json"]);

    assert_eq!(result["count"], 65);
    let colors = result["colors"].as_array().unwrap();
    assert_eq!(colors.len(), 65);
    assert_eq!(colors[0]["id"], "da-hong");
    assert_eq!(colors[0]["hex"], "#C3272B");
    assert!(colors.iter().all(|c| c["family"].is_string()));
}

#[test]
fn test_colors_filter_by_family() {
    let dir = temp_dir();
    let dataset = write_dataset(&dir, &small_dataset());
    let dataset = dataset.to_str().unwrap();

    let result = run_json(&["colors", "--dataset", dataset, "--family", "red", "--json"]);
    assert_eq!(ids(&result), vec!["zhu-hong"]);

    // Chinese family names work too
    let result = run_json(&["colors", "--dataset", dataset, "--family", "蓝", "--json"]);
    assert_eq!(ids(&result), vec!["dian-qing"]);
}

#[test]
fn test_colors_filter_by_dynasty_and_mood() {
    let dir = temp_dir();
    let dataset = write_dataset(&dir, &small_dataset());
    let dataset = dataset.to_str().unwrap();

    let result = run_json(&["colors", "--dataset", dataset, "--dynasty", "Song", "--json"]);
    assert_eq!(ids(&result), vec!["teng-huang", "yue-bai"]);

    let result = run_json(&["colors", "--dataset", dataset, "--mood", "空灵", "--json"]);
    assert_eq!(ids(&result), vec!["yue-bai"]);

    let result = run_json(&[
        "colors", "--dataset", dataset, "--dynasty", "宋", "--mood", "ethereal", "--json",
    ]);
    assert_eq!(ids(&result), vec!["yue-bai"]);
}

#[test]
fn test_colors_human_output() {
    let dir = temp_dir();
    let dataset = write_dataset(&dir, &small_dataset());
    let output = run(&["colors", "--dataset", dataset.to_str().unwrap()]);
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Colors (5):"));
    assert!(stdout.contains("song-lv"));
    assert!(stdout.contains("#057748"));
}

#[test]
fn test_colors_no_match() {
    let dir = temp_dir();
    let dataset = write_dataset(&dir, &small_dataset());
    let output = run(&[
        "colors", "--dataset", dataset.to_str().unwrap(), "--family", "purple",
    ]);
    assert_success(&output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("No colors match."));
}

#[test]
fn test_colors_unknown_filters_are_validation_errors() {
    for args in [
        ["colors", "--family", "mauve"],
        ["colors", "--dynasty", "Atlantis"],
        ["colors", "--mood", "grumpy"],
    ] {
        let output = run(&args);
        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
    }
}

#[test]
fn test_colors_dataset_errors() {
    let output = run(&["colors", "--dataset", "/nonexistent/colors.json"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("not found"));

    let dir = temp_dir();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "[{\"id\": 1}]").unwrap();
    let output = run(&["colors", "--dataset", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_colors_duplicate_ids_rejected() {
    let dir = temp_dir();
    let mut colors = small_dataset();
    colors.push(test_color("zhu-hong", "朱红", "#FF461F", "", ""));
    let dataset = write_dataset(&dir, &colors);

    let output = run(&["colors", "--dataset", dataset.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Duplicate"));
}
