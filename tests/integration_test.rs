/// Integration tests for the paleta CLI: documentation generation, the
/// contrast audit, and palette listing.
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Generating with the default format writes all three documents
#[test]
fn test_generate_all_formats() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("docs");

    let mut cmd = Command::cargo_bin("paleta").unwrap();
    cmd.arg("generate")
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("color-palette.md"))
        .stdout(predicate::str::contains("color-palette.json"))
        .stdout(predicate::str::contains("color-variables.css"))
        .stdout(predicate::str::contains("29 colors across 6 categories"));

    assert!(out.join("color-palette.md").exists());
    assert!(out.join("color-palette.json").exists());
    assert!(out.join("color-variables.css").exists());
}

/// A single-format request writes only that file
#[test]
fn test_generate_css_only() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("docs");

    Command::cargo_bin("paleta")
        .unwrap()
        .arg("generate")
        .arg("--output")
        .arg(&out)
        .arg("--format")
        .arg("css")
        .assert()
        .success()
        .stdout(predicate::str::contains("color-variables.css"));

    assert!(out.join("color-variables.css").exists());
    assert!(!out.join("color-palette.md").exists());
    assert!(!out.join("color-palette.json").exists());
}

/// The emitted JSON is valid and carries the audit array
#[test]
fn test_generated_json_structure() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("docs");

    Command::cargo_bin("paleta")
        .unwrap()
        .arg("generate")
        .arg("--output")
        .arg(&out)
        .arg("--format")
        .arg("json")
        .assert()
        .success();

    let json = fs::read_to_string(out.join("color-palette.json")).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(doc["metadata"]["version"].is_string());
    assert!(doc["metadata"]["generated_at"].is_string());
    assert!(doc["colors"]["primary"].is_array());
    assert!(doc["colors"]["accent"].is_array());

    let accessibility = doc["accessibility"].as_array().unwrap();
    assert_eq!(accessibility.len(), 15);
    for entry in accessibility {
        assert!(entry["contrast"]["ratio"].as_f64().unwrap() >= 1.0);
    }
}

/// The CSS file has one declaration per color inside :root
#[test]
fn test_generated_css_structure() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("docs");

    Command::cargo_bin("paleta")
        .unwrap()
        .arg("generate")
        .arg("--output")
        .arg(&out)
        .arg("--format")
        .arg("css")
        .assert()
        .success();

    let css = fs::read_to_string(out.join("color-variables.css")).unwrap();
    assert!(css.starts_with(":root {"));
    let declarations = css
        .lines()
        .filter(|l| l.trim_start().starts_with("--color-"))
        .count();
    assert_eq!(declarations, 29);
    assert!(css.contains("--color-primary-600: #2563eb;"));
}

/// Generation is deterministic apart from the JSON timestamp
#[test]
fn test_generate_is_reproducible() {
    let temp_dir = TempDir::new().unwrap();
    let out_a = temp_dir.path().join("a");
    let out_b = temp_dir.path().join("b");

    for out in [&out_a, &out_b] {
        Command::cargo_bin("paleta")
            .unwrap()
            .arg("generate")
            .arg("--output")
            .arg(out)
            .arg("--format")
            .arg("markdown")
            .assert()
            .success();
    }

    let md_a = fs::read_to_string(out_a.join("color-palette.md")).unwrap();
    let md_b = fs::read_to_string(out_b.join("color-palette.md")).unwrap();
    assert_eq!(md_a, md_b);
}

/// The audit command reports failures in the standard palette and exits
/// non-zero
#[test]
fn test_check_command_flags_failures() {
    let mut cmd = Command::cargo_bin("paleta").unwrap();

    cmd.arg("check")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("WCAG Contrast Audit"))
        .stdout(predicate::str::contains("Neutral 400 on White"))
        .stdout(predicate::str::contains("Warnings"));
}

/// Listing prints every category and known tokens
#[test]
fn test_list_command() {
    let mut cmd = Command::cargo_bin("paleta").unwrap();

    cmd.arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Primary"))
        .stdout(predicate::str::contains("Neutral"))
        .stdout(predicate::str::contains("#2563eb"))
        .stdout(predicate::str::contains("29 colors across 6 categories"));
}

/// --help exits 0 without doing any work
#[test]
fn test_help_exits_cleanly() {
    let mut cmd = Command::cargo_bin("paleta").unwrap();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("check"));
}
