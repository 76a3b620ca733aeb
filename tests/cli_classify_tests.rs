//! End-to-end tests for `colorvein classify`.

mod fixtures;
use fixtures::*;

#[test]
fn test_classify_hsl() {
    let output = run(&["classify", "--hsl", "9,52,25"]);
    assert_success(&output);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "brown (棕)");
}

#[test]
fn test_classify_hex_json() {
    let result = run_json(&["classify", "--hex", "#1E3A8A", "--json"]);
    assert_eq!(result["family"], "blue");
    assert_eq!(result["label"], "蓝");
    assert_eq!(result["hex"], "#1E3A8A");
    assert!(result["hsl"].is_array());
}

#[test]
fn test_classify_achromatic() {
    let result = run_json(&["classify", "--hex", "#FFFFFF", "--json"]);
    assert_eq!(result["family"], "white");

    let result = run_json(&["classify", "--hsl", "0,0,10", "--json"]);
    assert_eq!(result["family"], "black");
    // No hex echoed for HSL input
    assert!(result.get("hex").is_none());
}

#[test]
fn test_classify_invalid_input() {
    for args in [
        ["classify", "--hsl", "9,52"],
        ["classify", "--hsl", "a,b,c"],
        ["classify", "--hex", "#GGGGGG"],
    ] {
        let output = run(&args);
        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
    }
}

#[test]
fn test_classify_requires_input() {
    let output = run(&["classify"]);
    assert!(!output.status.success());
}
