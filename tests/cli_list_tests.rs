//! End-to-end tests for `huepick list`.

use std::process::Command;

/// Path to the huepick binary
fn huepick_bin() -> &'static str {
    env!("CARGO_BIN_EXE_huepick")
}

#[test]
fn test_list_all() {
    let output = Command::new(huepick_bin())
        .args(["list"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Listing all colors should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("red"));
    assert!(stdout.contains("#FF0000"));
    assert!(stdout.contains("rebeccapurple"));
}

#[test]
fn test_list_basic_filter() {
    let output = Command::new(huepick_bin())
        .args(["list", "--filter", "basic"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("16 colors"));
    assert!(!stdout.contains("rebeccapurple"));
}

#[test]
fn test_list_json() {
    let output = Command::new(huepick_bin())
        .args(["list", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert!(result["count"].is_number(), "Should have count field");
    let colors = result["colors"].as_array().expect("Should have colors array");
    assert_eq!(colors.len(), result["count"].as_u64().unwrap() as usize);
    assert!(colors.len() > 100, "Should have the full catalog");

    for color in colors.iter().take(5) {
        assert!(color["name"].is_string());
        assert!(color["hex"].is_string());
        assert!(color["rgb"].is_string());
        assert!(color["category"].is_string());
    }
}

#[test]
fn test_list_json_basic_categories() {
    let output = Command::new(huepick_bin())
        .args(["list", "--filter", "basic", "--json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    let colors = result["colors"].as_array().unwrap();
    assert_eq!(colors.len(), 16);
    assert!(colors.iter().all(|c| c["category"] == "basic"));
}

#[test]
fn test_list_rejects_unknown_filter() {
    let output = Command::new(huepick_bin())
        .args(["list", "--filter", "bogus"])
        .output()
        .expect("Failed to execute command");

    assert_ne!(output.status.code(), Some(0));
}
