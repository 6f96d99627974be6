//! Integration tests for the chapnav CLI

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::{chapnav, fixture};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    chapnav()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("scan"))
        .stdout(predicate::str::contains("next"))
        .stdout(predicate::str::contains("prev"))
        .stdout(predicate::str::contains("press"));
}

#[test]
fn missing_page_argument_is_a_usage_error() {
    chapnav()
        .arg("scan")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("<PAGE>"));
}

// ============================================================================
// Scan Tests
// ============================================================================

#[test]
fn scan_lists_sorted_unique_chapters() {
    chapnav()
        .arg("scan")
        .arg(fixture("watch_page.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("4 chapters"))
        .stdout(predicate::str::contains(
            "https://www.youtube.com/watch?v=abc123&t=600s",
        ))
        .stdout(predicate::str::contains("5:55").not());
}

#[test]
fn scan_json_is_machine_readable() {
    let output = chapnav()
        .arg("scan")
        .arg(fixture("watch_page.html"))
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let seconds: Vec<u64> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["seconds"].as_u64().unwrap())
        .collect();
    assert_eq!(seconds, vec![0, 65, 150, 600]);
    assert_eq!(rows[2]["label"], "2:30");
}

#[test]
fn scan_page_without_chapters() {
    chapnav()
        .arg("scan")
        .arg(fixture("no_chapters.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No chapters found"));
}

#[test]
fn scan_nonexistent_page_fails_with_helpful_error() {
    chapnav()
        .args(["scan", "/some/path/to/missing.html"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Page not found"))
        .stderr(predicate::str::contains("missing.html"));
}

// ============================================================================
// Navigation Tests
// ============================================================================

#[test]
fn next_with_position_seeks() {
    chapnav()
        .arg("next")
        .arg(fixture("watch_page.html"))
        .args(["--at", "70"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Seek to chapter 2:30 (2:30) at 150.01s",
        ));
}

#[test]
fn prev_accepts_timestamp_position() {
    chapnav()
        .arg("prev")
        .arg(fixture("watch_page.html"))
        .args(["--at", "10:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chapter 2:30"));
}

#[test]
fn next_without_position_follows_link_from_time_display() {
    // Time display shows 1:10, so the next chapter is 2:30
    chapnav()
        .arg("next")
        .arg(fixture("watch_page.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Follow chapter 2:30 (2:30): https://www.youtube.com/watch?v=abc123&t=150s",
        ));
}

#[test]
fn prev_at_first_chapter_exits_1() {
    chapnav()
        .arg("prev")
        .arg(fixture("watch_page.html"))
        .args(["--at", "0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No prev chapter"));
}

#[test]
fn next_on_page_without_chapters_exits_1() {
    chapnav()
        .arg("next")
        .arg(fixture("no_chapters.html"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No next chapter"));
}

#[test]
fn whole_page_is_scanned_when_containers_are_missing() {
    chapnav()
        .arg("prev")
        .arg(fixture("no_containers.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "https://www.youtube.com/watch?v=emb&t=15s",
        ));
}

#[test]
fn invalid_position_is_a_usage_error() {
    chapnav()
        .arg("next")
        .arg(fixture("watch_page.html"))
        .args(["--at", "soon"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("neither seconds nor a timestamp"));
}

// ============================================================================
// Press Tests
// ============================================================================

#[test]
fn press_bound_key_is_handled() {
    chapnav()
        .arg("press")
        .arg(fixture("watch_page.html"))
        .args(["n", "--at", "70"])
        .assert()
        .success()
        .stdout(predicate::str::diff("handled\n"));
}

#[test]
fn press_with_modifier_passes_through() {
    chapnav()
        .arg("press")
        .arg(fixture("watch_page.html"))
        .args(["n", "--ctrl"])
        .assert()
        .success()
        .stdout(predicate::str::diff("pass-through\n"));
}

#[test]
fn press_while_typing_passes_through() {
    chapnav()
        .arg("press")
        .arg(fixture("watch_page.html"))
        .args(["p", "--focus", "textarea"])
        .assert()
        .success()
        .stdout(predicate::str::diff("pass-through\n"));
}

#[test]
fn press_unbound_key_passes_through() {
    chapnav()
        .arg("press")
        .arg(fixture("watch_page.html"))
        .arg("k")
        .assert()
        .success()
        .stdout(predicate::str::diff("pass-through\n"));
}

// ============================================================================
// Parse Tests
// ============================================================================

#[test]
fn parse_prints_seconds() {
    chapnav()
        .args(["parse", "1:02:03"])
        .assert()
        .success()
        .stdout(predicate::str::diff("3723\n"));
}

#[test]
fn parse_rejects_garbage() {
    chapnav()
        .args(["parse", "abc"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Not a timestamp"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_show_prints_defaults() {
    chapnav()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[keys]"))
        .stdout(predicate::str::contains("next = \"n\""))
        .stdout(predicate::str::contains("seek_offset = 0.01"));
}

#[test]
fn custom_keys_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[keys]\nnext = \".\"\nprev = \",\"\n").unwrap();

    chapnav()
        .env("CHAPNAV_CONFIG", &path)
        .arg("press")
        .arg(fixture("watch_page.html"))
        .args([".", "--at", "70"])
        .assert()
        .success()
        .stdout(predicate::str::diff("handled\n"));
}

#[test]
fn invalid_config_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[keys]\nnext = \"p\"\n").unwrap();

    chapnav()
        .env("CHAPNAV_CONFIG", &path)
        .arg("scan")
        .arg(fixture("watch_page.html"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("bound to both next and prev"));
}

#[test]
fn relative_base_url_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[page]\nbase_url = \"www.youtube.com\"\n").unwrap();

    chapnav()
        .env("CHAPNAV_CONFIG", &path)
        .arg("scan")
        .arg(fixture("watch_page.html"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid base URL 'www.youtube.com'"));
}

#[test]
fn config_init_writes_defaults_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    chapnav()
        .env("CHAPNAV_CONFIG", &path)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(path.exists());

    chapnav()
        .env("CHAPNAV_CONFIG", &path)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn config_path_honours_override() {
    chapnav()
        .env("CHAPNAV_CONFIG", "/tmp/chapnav-test/config.toml")
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::diff("/tmp/chapnav-test/config.toml\n"));
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn completions_for_bash() {
    chapnav()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chapnav"));
}
