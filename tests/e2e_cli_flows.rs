//! E2E CLI flows: transcript pages, single messages, report extraction.
//!
//! All tests run the real binary against fixtures under `tests/fixtures/safehike`.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

mod util;

use util::{fixture, fixture_text};

fn base_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("safehike");
    cmd.env_remove("SAFEHIKE_TRUNCATE_AT");
    cmd.env("SAFEHIKE_LOG", "off");
    cmd
}

#[test]
fn cli_shows_help() {
    base_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("extract"));
}

#[test]
fn render_transcript_to_file() {
    let dir = TempDir::new().expect("tempdir");
    let out = dir.path().join("session.html");

    base_cmd()
        .args(["render"])
        .arg(fixture("takao_session.json"))
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let html = fs::read_to_string(&out).expect("read page");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Safehike: a safety-first hiking assistant"));
    // Transcript title replaces the default chat label.
    assert!(html.contains("Mt. Takao day hike"));

    // Greeting, tool badge, thinking bubble, report, streaming fallback.
    assert_eq!(html.matches(r#"<div class="greeting">"#).count(), 1);
    assert!(html.contains("tool-call-complete"));
    assert!(html.contains("set_mountain"));
    assert_eq!(html.matches(r#"<div class="report">"#).count(), 1);
    assert_eq!(html.matches(r#"<div class="thinking">"#).count(), 2);
    assert!(html.contains("Show more"));
    assert_eq!(html.matches(r#"<details class="thinking-collapse">"#).count(), 1);
    // Collapsed bubbles still carry their full text for the reader to expand.
    assert!(html.contains("before comparing the main routes to the summit."));
    assert!(html.contains("ThinkingToggles.init()"));
    assert!(html.contains(r#"data-key="Trail 1-Easy""#));
    assert!(html.contains("<strong>2025-11-02</strong>"));
}

#[test]
fn render_transcript_to_stdout_with_overrides() {
    base_cmd()
        .args(["render", "--expand-thinking", "--title", "Trip log"])
        .arg(fixture("takao_session.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>Trip log</title>"))
        .stdout(predicate::str::contains(r#"<details class="thinking-collapse" open>"#))
        .stdout(predicate::str::contains(r#"<details class="thinking-collapse">"#).not())
        .stdout(predicate::str::contains(r#"data-expanded="Show less">Show less</span>"#));
}

#[test]
fn render_respects_config_file() {
    let dir = TempDir::new().expect("tempdir");
    let config = dir.path().join("config.toml");
    fs::write(&config, "truncate_at = 500\nchat_title = \"Trip planner\"\n").expect("write config");
    let transcript = dir.path().join("t.json");
    fs::write(&transcript, r#"[{"id":"m1","content":"short enough"}]"#).expect("write transcript");

    base_cmd()
        .arg("--config")
        .arg(&config)
        .arg("render")
        .arg(&transcript)
        .assert()
        .success()
        .stdout(predicate::str::contains("Trip planner"))
        .stdout(predicate::str::contains(r#"<summary class="thinking-toggle""#).not());
}

#[test]
fn render_missing_transcript_fails() {
    base_cmd()
        .args(["render", "/nonexistent/transcript.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read transcript"));
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().expect("tempdir");
    let config = dir.path().join("config.toml");
    fs::write(&config, "truncate_at = 0\n").expect("write config");

    base_cmd()
        .arg("--config")
        .arg(&config)
        .arg("render")
        .arg(fixture("takao_session.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("truncate_at"));
}

#[test]
fn message_routes_report() {
    base_cmd()
        .arg("message")
        .arg(fixture("report_message.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Hiking Safety Report"))
        .stdout(predicate::str::contains("<p>ok</p>"));
}

#[test]
fn message_generation_guard() {
    base_cmd()
        .args(["message", "--generating"])
        .arg(fixture("report_message.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"class="thinking""#))
        .stdout(predicate::str::contains("Hiking Safety Report").not());
}

#[test]
fn message_from_stdin() {
    base_cmd()
        .args(["message", "-"])
        .write_stdin(r#"{"id":"m1","content":"Hello there"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello there"))
        .stdout(predicate::str::contains(r#"<summary class="thinking-toggle""#).not());
}

#[test]
fn extract_fenced_reply() {
    let output = base_cmd()
        .arg("extract")
        .arg(fixture("fenced_reply.txt"))
        .output()
        .expect("run extract");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("report JSON");
    assert_eq!(report["summary"], "Tanzawa, Omote-One ridge");
    assert_eq!(report["risk_emojis"].as_array().map(Vec::len), Some(2));
    assert_eq!(report["trails_info"][0]["name"], "Okura ridge");
}

#[test]
fn extract_prose_fails() {
    base_cmd()
        .args(["extract", "-"])
        .write_stdin("Which mountain would you like to climb?")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no hiking report found"));
}

#[test]
fn extract_matches_fixture_payload() {
    // The fenced payload round-trips to exactly the JSON inside the fence.
    let text = fixture_text("fenced_reply.txt");
    let start = text.find("```json").unwrap() + "```json".len();
    let end = text.rfind("```").unwrap();
    let expected: Value = serde_json::from_str(text[start..end].trim()).unwrap();

    let output = base_cmd()
        .args(["extract", "-"])
        .write_stdin(text)
        .output()
        .expect("run extract");
    let actual: Value = serde_json::from_slice(&output.stdout).expect("report JSON");
    assert_eq!(actual, expected);
}
