// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SwingLab Contributors
// ABOUTME: Integration tests for the swinglab binary
// ABOUTME: Tests help output, JSON results on stdout and failure exit codes

//! Integration tests for the `swinglab` binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::{json, Value};
use std::fs;
use std::process::Command;
use tempfile::TempDir;

/// Run the CLI with a clean engine environment and capture output
fn run_cli(args: &[&str]) -> (i32, String, String) {
    run_cli_with_env(args, &[])
}

fn run_cli_with_env(args: &[&str], envs: &[(&str, &str)]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_swinglab"))
        .args(args)
        .env_remove("SWINGLAB_INTELLIGENCE_CONFIG")
        .env_remove("SWINGLAB_SENSOR_CONFIG")
        .env_remove("SWINGLAB_DEFAULT_AGE_BRACKET")
        .env_remove("SWINGLAB_DEFAULT_MOTOR_PROFILE")
        .env("RUST_LOG", "warn")
        .envs(envs.iter().copied())
        .output()
        .unwrap();

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (exit_code, stdout, stderr)
}

fn write_json(dir: &TempDir, name: &str, value: &Value) -> String {
    let path = dir.path().join(name);
    fs::write(&path, value.to_string()).unwrap();
    path.display().to_string()
}

#[test]
fn test_cli_help_lists_commands() {
    let (exit_code, stdout, _stderr) = run_cli(&["--help"]);
    assert_eq!(exit_code, 0);
    for command in ["normalize", "score", "fingerprint", "prescribe", "session"] {
        assert!(stdout.contains(command), "help should mention {command}");
    }
}

#[test]
fn test_cli_prescribe_filters_for_profile() {
    let (exit_code, stdout, _stderr) =
        run_cli(&["prescribe", "--flags", "flag_casting", "--profile", "WHIPPER"]);
    assert_eq!(exit_code, 0);
    let prescription: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(prescription["profile"], "WHIPPER");
    assert_eq!(prescription["withheld"], json!(["constraint-rope-drill"]));
}

#[test]
fn test_cli_score_reads_metrics_file() {
    let dir = TempDir::new().unwrap();
    let path = write_json(
        &dir,
        "metrics.json",
        &json!({ "torso_momentum_peak": 10.0, "arms_momentum_peak": 16.5 }),
    );
    let (exit_code, stdout, _stderr) = run_cli(&["score", &path, "--bracket", "hs"]);
    assert_eq!(exit_code, 0);
    let scores: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(scores["bracket"], "HS");
    let arms_torso = scores["bat"]["components"]
        .as_array()
        .unwrap()
        .iter()
        .find(|component| component["name"] == "arms_torso_transfer")
        .unwrap();
    assert_eq!(arms_torso["score"], 95.0);
}

#[test]
fn test_cli_normalize_partitions_batch() {
    let dir = TempDir::new().unwrap();
    let path = write_json(
        &dir,
        "swings.json",
        &json!([
            { "speedBarrelMax": 70.0, "speedHandsMax": 22.0 },
            { "speedBarrelMax": 15.0 }
        ]),
    );
    let (exit_code, stdout, _stderr) = run_cli(&["normalize", &path]);
    assert_eq!(exit_code, 0);
    let batch: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(batch["valid"].as_array().unwrap().len(), 1);
    assert_eq!(batch["invalid"][0]["invalid_reason"], "below_speed_threshold");
}

#[test]
fn test_cli_missing_input_fails() {
    let (exit_code, stdout, stderr) = run_cli(&["score", "/definitely/not/here.json"]);
    assert_ne!(exit_code, 0);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Failed to read"));
}

#[test]
fn test_cli_missing_input_exits_with_io_status() {
    let (exit_code, _stdout, _stderr) = run_cli(&["session", "/definitely/not/here.json"]);
    assert_eq!(exit_code, 1);
}

#[test]
fn test_cli_invalid_config_exits_with_config_status() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("intelligence.json");
    fs::write(&path, "{ not json").unwrap();
    let path = path.display().to_string();

    let (exit_code, stdout, stderr) = run_cli_with_env(
        &["prescribe", "--flags", "flag_casting"],
        &[("SWINGLAB_INTELLIGENCE_CONFIG", path.as_str())],
    );
    assert_eq!(exit_code, 3);
    assert!(stdout.is_empty());
    assert!(stderr.contains("intelligence"));
}

#[test]
fn test_cli_session_batch_reports_failed_session() {
    let dir = TempDir::new().unwrap();
    let good_id = "6f1c2a52-8f36-4c1e-9d2e-0a4c5b6d7e8f";
    let bad_id = "0d9e8f7a-6b5c-4d3e-8f1a-2b3c4d5e6f70";
    let path = write_json(
        &dir,
        "sessions.json",
        &json!([
            { "session_id": good_id, "raw_swings": [{ "speedBarrelMax": 70.0 }] },
            { "session_id": bad_id, "raw_swings": [42] }
        ]),
    );

    let (exit_code, stdout, stderr) = run_cli(&["session", &path]);
    assert_eq!(exit_code, 2);
    assert!(stderr.contains("1 of 2 sessions failed"));

    let entries: Value = serde_json::from_str(&stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["session_id"], good_id);
    assert!(entries[0].get("four_b").is_some());
    assert_eq!(entries[1]["session_id"], bad_id);
    assert_eq!(entries[1]["error"]["code"], "INVALID_FORMAT");
}
