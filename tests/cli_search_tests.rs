//! End-to-end tests for `huepick search`.

use std::process::Command;

/// Path to the huepick binary
fn huepick_bin() -> &'static str {
    env!("CARGO_BIN_EXE_huepick")
}

#[test]
fn test_search_by_name() {
    let output = Command::new(huepick_bin())
        .args(["search", "turquoise"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("turquoise"));
}

#[test]
fn test_search_by_hex() {
    let output = Command::new(huepick_bin())
        .args(["search", "663399"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("rebeccapurple"));
}

#[test]
fn test_search_json_structure() {
    let output = Command::new(huepick_bin())
        .args(["search", "gray", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["query"], "gray");
    assert!(result["count"].is_number());
    let results = result["results"].as_array().expect("results array");
    assert_eq!(results.len(), result["count"].as_u64().unwrap() as usize);

    // Merged results carry a categories array
    let gray = results
        .iter()
        .find(|r| r["name"] == "gray")
        .expect("gray should match");
    let categories = gray["categories"].as_array().unwrap();
    assert!(categories.contains(&serde_json::json!("basic")));
    assert!(categories.contains(&serde_json::json!("extended")));
}

#[test]
fn test_search_no_duplicate_names() {
    let output = Command::new(huepick_bin())
        .args(["search", "gr", "--json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let names: Vec<&str> = result["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    let mut deduped = names.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(names.len(), deduped.len());
}

#[test]
fn test_search_limit() {
    let output = Command::new(huepick_bin())
        .args(["search", "dark", "--limit", "3", "--json"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(result["count"].as_u64().unwrap() <= 3);
}

#[test]
fn test_search_basic_scope_misses_extended_name() {
    let output = Command::new(huepick_bin())
        .args(["search", "rebeccapurple", "--filter", "basic", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0), "no match is not an error");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["count"], 0);
}

#[test]
fn test_search_nonsense_reports_no_match() {
    let output = Command::new(huepick_bin())
        .args(["search", "zzqqxx"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No colors match"));
}
