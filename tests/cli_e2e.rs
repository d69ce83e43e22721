//! End-to-end tests for the `ascii-player` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn player() -> Command {
    Command::cargo_bin("ascii-player").unwrap()
}

#[test]
fn test_missing_file_reports_not_found() {
    player()
        .arg("/no/such/dir/clip.mp4")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Error: File not found: /no/such/dir/clip.mp4",
        ));
}

#[test]
fn test_missing_file_checked_before_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "not = [valid").unwrap();

    player()
        .arg("/no/such/dir/clip.mp4")
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_zero_width_is_rejected() {
    player()
        .args(["clip.mp4", "--width", "0"])
        .assert()
        .failure();
}

#[test]
fn test_video_argument_required() {
    player().assert().failure();
}

#[test]
fn test_help_lists_options() {
    player()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--width"))
        .stdout(predicate::str::contains("--detailed"))
        .stdout(predicate::str::contains("--start"));
}

#[test]
fn test_unreadable_video_exits_with_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"this is not a video").unwrap();

    player()
        .arg(file.path())
        .env("XDG_CONFIG_HOME", file.path().parent().unwrap())
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn test_invalid_config_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let video = dir.path().join("clip.mp4");
    std::fs::write(&video, b"placeholder").unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[player]\nwidth = 0\n").unwrap();

    player()
        .arg(&video)
        .arg("-c")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("player.width must be at least 1"));
}
