//! Integration tests for the seekramp CLI

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{json_lines, seekramp};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    seekramp(&dir.path().join("config.toml"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("config"));
}

// ============================================================================
// Simulate Tests
// ============================================================================

fn write_default_config(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    seekramp::Config::default().save_to(&path).unwrap();
    path
}

#[test]
fn simulate_prints_statuses_ticks_and_seek_in_order() {
    let dir = TempDir::new().unwrap();
    let config = write_default_config(&dir);

    let output = seekramp(&config)
        .args(["simulate", "--duration", "100", "--ticks", "3"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = json_lines(&output.stdout);
    let events: Vec<&str> = lines.iter().map(|l| l["event"].as_str().unwrap()).collect();
    assert_eq!(
        events,
        vec![
            "videoStatus",
            "videoStatus",
            "tick",
            "videoStatus",
            "videoStatus",
            "tick",
            "videoStatus",
            "videoStatus",
            "tick",
            "videoStatus",
            "seek",
            "videoStatus",
        ]
    );

    assert_eq!(lines[1]["phase"], "seeking");
    assert_eq!(lines[1]["currentTime"], 3.0);
    assert_eq!(lines[8]["intervalMs"], 300);
    assert_eq!(lines[8]["speedTier"], 2);
    assert_eq!(lines[8]["schedule"], "accelerating");
    assert_eq!(lines[10]["positionMs"], 0);
}

#[test]
fn simulate_near_the_end_uses_decelerating_schedule() {
    let dir = TempDir::new().unwrap();
    let config = write_default_config(&dir);

    let output = seekramp(&config)
        .args(["simulate", "--start", "95", "--ticks", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = json_lines(&output.stdout);
    let tick = lines.iter().find(|l| l["event"] == "tick").unwrap();
    assert_eq!(tick["schedule"], "decelerating");
    assert_eq!(tick["intervalMs"], 500);
    let seek = lines.iter().find(|l| l["event"] == "seek").unwrap();
    assert_eq!(seek["positionMs"], 88_000);
}

#[test]
fn simulate_live_stream_prints_nothing() {
    let dir = TempDir::new().unwrap();
    let config = write_default_config(&dir);

    seekramp(&config)
        .args(["simulate", "--live", "--press", "--ticks", "4"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn simulate_honors_skip_override() {
    let dir = TempDir::new().unwrap();
    let config = write_default_config(&dir);

    let output = seekramp(&config)
        .args(["simulate", "--start", "50", "--press", "--no-release", "--skip", "5"])
        .output()
        .unwrap();

    let lines = json_lines(&output.stdout);
    let seek = lines.iter().find(|l| l["event"] == "seek").unwrap();
    assert_eq!(seek["positionMs"], 55_000);
}

#[test]
fn simulate_rejects_invalid_skip() {
    let dir = TempDir::new().unwrap();
    let config = write_default_config(&dir);

    seekramp(&config)
        .args(["simulate", "--skip", "0", "--ticks", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("skip_length_secs must be"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_init_writes_defaults_and_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    seekramp(&path)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert!(path.exists());

    seekramp(&path)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    seekramp(&path)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_path_prints_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");

    seekramp(&path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn config_show_reflects_file_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[seek]\nskip_length_secs = 15.0\n").unwrap();

    seekramp(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skip_length_secs = 15.0"))
        .stdout(predicate::str::contains("[session]"))
        .stdout(predicate::str::contains("init_timeout_ms = 30000"))
        .stdout(predicate::str::contains("[controls]"))
        .stdout(predicate::str::contains("hide_after_ms = 3000"));
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn completions_generate_bash_script() {
    let dir = TempDir::new().unwrap();
    seekramp(&dir.path().join("config.toml"))
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_seekramp"));
}
