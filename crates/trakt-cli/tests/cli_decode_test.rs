#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use assert_cmd::cargo_bin_cmd;
use predicates::prelude::{PredicateBooleanExt, predicate};

const FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../fixtures/trakt");

fn fixture(name: &str) -> String {
    format!("{FIXTURES}/{name}")
}

#[test]
fn test_decode_show_summary() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("trakt");
    cmd.env("RUST_LOG", "info")
        .args(["decode", "--shape", "show-summary"])
        .arg(fixture("show_summary.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("The Walking Dead"))
        .stdout(predicate::str::contains("First aired: 2010-10-31"));
}

#[test]
fn test_decode_show_seasons_lists_episode_forms() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("trakt");
    cmd.env("RUST_LOG", "info")
        .args(["decode", "--shape", "show-seasons"])
        .arg(fixture("show_seasons.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("6 episodes"));
}

#[test]
fn test_decode_list_items_add() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("trakt");
    cmd.env("RUST_LOG", "info")
        .args(["decode", "--shape", "list-items-add"])
        .arg(fixture("list_items_add.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Inserted: 2"));
}

#[test]
fn test_decode_failure_envelope_exits_nonzero() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("trakt");
    cmd.args(["decode", "--shape", "rate"])
        .arg(fixture("error_failure.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed authentication"));
}

#[test]
fn test_decode_wrong_shape_reports_path() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("trakt");
    cmd.args(["decode", "--shape", "show-summary"])
        .arg(fixture("genres_shows.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to decode"));
}

#[test]
fn test_decode_missing_file() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("trakt");
    cmd.args(["decode", "--shape", "genres", "/nonexistent/trakt.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_decode_help_lists_shapes() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("trakt");
    cmd.args(["decode", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("show-summary"))
        .stdout(predicate::str::contains("--shape"));
}

#[test]
fn test_genres_without_api_key_fails() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("trakt");
    cmd.env_remove("TRAKT_API_KEY")
        .arg("--dir")
        .arg(dir.path())
        .args(["genres", "shows"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("TRAKT_API_KEY"));
}

#[test]
fn test_calendar_days_requires_date() {
    // Arrange & Act & Assert
    let mut cmd = cargo_bin_cmd!("trakt");
    cmd.args(["calendar", "--days", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--date"));
}

#[test]
fn test_config_show_masks_key() {
    // Arrange
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[api]\napi_key = \"abcdef123456\"\n",
    )
    .unwrap();

    // Act & Assert
    let mut cmd = cargo_bin_cmd!("trakt");
    cmd.env_remove("TRAKT_API_KEY")
        .env("RUST_LOG", "info")
        .arg("--dir")
        .arg(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api_key: abcd****"))
        .stdout(predicate::str::contains("abcdef123456").not());
}
