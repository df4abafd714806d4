//! Basic CLI E2E tests.
//!
//! Commands run through cargo against the dev data directory
//! (COLLEGEPAL_ENV=dev) so they never touch real user data.

use std::process::Command;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new("cargo")
        .args(["run", "-p", "collegepal-cli", "--quiet", "--"])
        .args(args)
        .env("COLLEGEPAL_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

#[test]
fn timer_status_prints_snapshot_json() {
    let (code, stdout, _) = run_cli(&["timer", "status"]);
    assert_eq!(code, 0, "timer status failed");
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("status output should be JSON");
    assert_eq!(parsed["type"], "TimerSnapshot");
    assert!(parsed["remaining_seconds"].is_number());
}

#[test]
fn timer_set_lengths_clamps() {
    let (code, stdout, _) = run_cli(&["timer", "set-lengths", "--focus", "0", "--break", "200"]);
    assert_eq!(code, 0, "set-lengths failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["focus_length"], 1);
    assert_eq!(parsed["break_length"], 60);
}

#[test]
fn note_add_then_list() {
    let (code, stdout, _) = run_cli(&["note", "add", "CLI smoke note"]);
    assert_eq!(code, 0, "note add failed");
    assert!(stdout.contains("Note created:"));

    let (code, stdout, _) = run_cli(&["note", "list"]);
    assert_eq!(code, 0, "note list failed");
    assert!(stdout.contains("CLI smoke note"));
}

#[test]
fn stats_show_reports_level() {
    let (code, stdout, _) = run_cli(&["stats", "show"]);
    assert_eq!(code, 0, "stats show failed");
    assert!(stdout.contains("LV "));
}

#[test]
fn config_get_and_list() {
    let (code, stdout, _) = run_cli(&["config", "get", "timer.focus_length"]);
    assert_eq!(code, 0, "config get failed");
    assert!(!stdout.trim().is_empty());

    let (code, stdout, _) = run_cli(&["config", "list"]);
    assert_eq!(code, 0, "config list failed");
    assert!(stdout.contains("[timer]"));
}

#[test]
fn config_get_unknown_key_fails() {
    let (code, _, stderr) = run_cli(&["config", "get", "timer.bogus"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown config key"));
}
