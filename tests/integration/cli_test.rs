//! Integration tests for the shotsync CLI

use crate::helpers::{fixture, run_shotsync, run_shotsync_with_config, temp_fixture};

// ============================================================================
// Listing Tests
// ============================================================================

#[test]
fn shots_lists_each_shot() {
    let path = fixture("two_shots.json");
    let (stdout, stderr, exit_code) = run_shotsync(&["shots", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    Shot 0: Frames 3-10 (unknown)
    Shot 1: Frames 13-17 (made)
    ");
}

#[test]
fn phases_of_first_shot_use_legacy_boundaries() {
    let path = fixture("two_shots.json");
    let (stdout, _stderr, exit_code) = run_shotsync(&["phases", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    insta::assert_snapshot!(stdout.trim_end(), @r"
    Shot 0 phases:
      Loading: Frames 4-5
      Rising: Frames 6-7
      Release: Frames 9-9
    ");
}

#[test]
fn phases_of_second_shot_close_at_shot_end() {
    let (_dir, path) = temp_fixture("two_shots.json");
    let (stdout, _stderr, exit_code) =
        run_shotsync(&["phases", path.to_str().unwrap(), "--shot", "1"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Shot 1 phases:"));
    assert!(stdout.contains("Loading: Frames 13-14"));
    assert!(stdout.contains("Release: Frames 15-17"));
}

#[test]
fn shots_accepts_analysis_envelope_without_shots() {
    let path = fixture("no_shots.json");
    let (stdout, _stderr, exit_code) = run_shotsync(&["shots", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("whole clip"));
}

// ============================================================================
// Replay Tests
// ============================================================================

#[test]
fn replay_prints_phases_and_pauses_at_end() {
    let path = fixture("two_shots.json");
    let (stdout, stderr, exit_code) = run_shotsync(&[
        "replay",
        path.to_str().unwrap(),
        "--duration",
        "0.7",
        "--fps",
        "30",
    ]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(
        stdout.starts_with("Replaying Shot 0 (Frames 3-10) at 30.000 fps, 21 frames, 00:00 long")
    );

    let loading = stdout.find("Loading").expect("Loading phase printed");
    let rising = stdout.find("Rising").expect("Rising phase printed");
    let release = stdout.find("Release").expect("Release phase printed");
    assert!(loading < rising && rising < release);
    assert!(stdout.trim_end().ends_with("00:00.700  frame    20  paused at end"));
}

#[test]
fn replay_of_unknown_shot_fails() {
    let path = fixture("two_shots.json");
    let (_stdout, stderr, exit_code) = run_shotsync(&[
        "replay",
        path.to_str().unwrap(),
        "--duration",
        "1",
        "--shot",
        "7",
    ]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("out of range"));
}

#[test]
fn replay_with_zero_duration_reports_load_failure() {
    let path = fixture("two_shots.json");
    let (_stdout, stderr, exit_code) =
        run_shotsync(&["replay", path.to_str().unwrap(), "--duration", "0"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("failed to load"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_show_prints_defaults() {
    let (stdout, _stderr, exit_code) = run_shotsync(&["config", "show"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("[playback]"));
    assert!(stdout.contains("default_fps = 29.952681388012618"));
    assert!(stdout.contains("auto_hide_ms = 3000"));
}

#[test]
fn invalid_config_only_breaks_commands_that_read_it() {
    let broken = Some("[playback\ndefault_fps = ");
    let path = fixture("two_shots.json");

    let (_stdout, stderr, exit_code) = run_shotsync_with_config(&["config", "show"], broken);
    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Invalid config file"));

    let (stdout, stderr, exit_code) = run_shotsync_with_config(&["config", "path"], broken);
    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    assert!(stdout.trim_end().ends_with("config.toml"));

    let (_stdout, _stderr, exit_code) =
        run_shotsync_with_config(&["shots", path.to_str().unwrap()], broken);
    assert_eq!(exit_code, 0);
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn missing_annotation_file_exits_1() {
    let (_stdout, stderr, exit_code) = run_shotsync(&["shots", "/nonexistent/frames.json"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to load annotations"));
}

#[test]
fn no_arguments_shows_usage_error() {
    let (_stdout, stderr, exit_code) = run_shotsync(&["shots"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("<FILE>"));
}
