//! Integration tests for the cuealign CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn cuealign() -> Command {
    Command::cargo_bin("cuealign").unwrap()
}

#[test]
fn test_segment_english_script() {
    cuealign()
        .args(["segment", "-i"])
        .arg(fixture_path("speech.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("speech.txt =="))
        .stdout(predicate::str::contains(
            "   0  Good evening everyone.  [Good evening everyone]",
        ))
        .stdout(predicate::str::contains("   2  Let us begin.  [Let us begin]"));
}

#[test]
fn test_segment_chinese_script() {
    cuealign()
        .args(["segment", "-i"])
        .arg(fixture_path("chinese.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("   0  你好世界。  [你 好 世 界]"))
        .stdout(predicate::str::contains("   1  今天天气很好。  [今 天 天 气 很 好]"));
}

#[test]
fn test_segment_glob_json() {
    let output = cuealign()
        .args(["segment", "-f", "json", "-i"])
        .arg(fixture_path("*.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let segments: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let segments = segments.as_array().unwrap();
    assert_eq!(segments.len(), 5);
    assert!(segments[0]["source"].as_str().unwrap().ends_with("chinese.txt"));
    assert_eq!(segments[4]["text"], "Let us begin.");
}

#[test]
fn test_segment_markdown() {
    cuealign()
        .args(["segment", "-f", "markdown", "-i"])
        .arg(fixture_path("speech.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("2. Thank you for coming tonight. *(5 tokens)*"))
        .stdout(predicate::str::contains("*Total segments: 3*"));
}

#[test]
fn test_segment_missing_file() {
    cuealign()
        .args(["segment", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_replay_timeline() {
    cuealign()
        .args(["replay", "-s"])
        .arg(fixture_path("speech.txt"))
        .arg("-t")
        .arg(fixture_path("speech.jsonl"))
        .assert()
        .success()
        .stdout(predicate::str::contains("     450ms  timer      (1, 0)  completed 0"))
        .stdout(predicate::str::contains("    1500ms  transcript (2, 1)  jumped 1->2 (+0)"))
        .stdout(predicate::str::contains("    2000ms  retreat    (1, 0)  navigated 2->1"))
        .stdout(predicate::str::contains("    2250ms  timer      (3, 0)  completed 2"))
        .stdout(predicate::str::contains(
            "final position: (3, 0) of 3 segments, finished",
        ))
        .stdout(predicate::str::contains("completions: 2, jumps: 1, navigations: 2"));
}

#[test]
fn test_replay_chinese_jump() {
    let output = cuealign()
        .args(["replay", "-f", "json", "-s"])
        .arg(fixture_path("chinese.txt"))
        .arg("-t")
        .arg(fixture_path("chinese.jsonl"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let replay: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let steps = replay["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0]["state"]["matched_token_count"], 4);
    assert_eq!(steps[1]["events"][0]["kind"], "jumped");
    assert_eq!(replay["summary"]["final_state"]["active_segment_index"], 1);
    assert_eq!(replay["summary"]["final_state"]["matched_token_count"], 1);
}

#[test]
fn test_replay_with_config_and_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.toml");
    let output = temp_dir.path().join("replay.md");
    fs::write(
        &config,
        "[alignment]\ndebounce_ms = 1000\n\n[output]\ninclude_text = true\n",
    )
    .unwrap();

    cuealign()
        .args(["replay", "-f", "markdown", "-s"])
        .arg(fixture_path("speech.txt"))
        .arg("-t")
        .arg(fixture_path("speech.jsonl"))
        .arg("-c")
        .arg(&config)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("| time (ms) | trigger | position | events | active segment |"));
    // the long debounce lets the first jump pre-empt the auto-advance
    assert!(content.contains(
        "| 900 | transcript | (1, 1) | jumped 0->1 (+0) | Thank you for coming tonight. |"
    ));
    assert!(content.contains("| 3200 | timer | (3, 0) | completed 2 | *end* |"));
}

#[test]
fn test_replay_bad_session() {
    let temp_dir = TempDir::new().unwrap();
    let session = temp_dir.path().join("bad.jsonl");
    fs::write(&session, "{\"at_ms\": 10, \"nav\": \"jump\"}\n").unwrap();

    cuealign()
        .args(["replay", "-s"])
        .arg(fixture_path("speech.txt"))
        .arg("-t")
        .arg(&session)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid session file"))
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn test_generate_then_validate() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("cuealign.toml");

    cuealign()
        .args(["generate-config", "-o"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration template written"));

    cuealign()
        .args(["validate", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Debounce: 50ms"));
}

#[test]
fn test_validate_rejects_threshold() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "[alignment]\njump_threshold = 1.5\n").unwrap();

    cuealign()
        .args(["validate", "-c"])
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn test_quiet_generate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("cuealign.toml");

    cuealign()
        .args(["generate-config", "-q", "-o"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert!(config.exists());
}

#[test]
fn test_help_lists_commands() {
    cuealign()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("segment"))
        .stdout(predicate::str::contains("replay"))
        .stdout(predicate::str::contains("generate-config"))
        .stdout(predicate::str::contains("validate"));
}
