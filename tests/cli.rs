//! Integration tests driving the habitual binary end to end.
//!
//! Each test points the binary at its own temp data directory through the
//! HABITUAL_DIR environment variable.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn habitual(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("habitual").unwrap();
    cmd.env("HABITUAL_DIR", dir.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_add_assigns_sequential_ids() {
    let dir = TempDir::new().unwrap();

    habitual(&dir)
        .args(["add", "Exercise"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Habit added with id 1"));

    habitual(&dir)
        .args(["add", "Reading"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Habit added with id 2"));
}

#[test]
fn test_list_shows_added_habits() {
    let dir = TempDir::new().unwrap();
    habitual(&dir).args(["add", "Exercise"]).assert().success();

    habitual(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercise"));
}

#[test]
fn test_list_empty() {
    let dir = TempDir::new().unwrap();

    habitual(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No habits yet"));
}

#[test]
fn test_done_and_streak() {
    let dir = TempDir::new().unwrap();
    habitual(&dir).args(["add", "Exercise"]).assert().success();

    habitual(&dir)
        .args(["done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marked done for today!"));

    // Same day again: idempotent.
    habitual(&dir)
        .args(["done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Already marked done today."));

    habitual(&dir)
        .args(["streak", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current streak: 1 days"));
}

#[test]
fn test_done_unknown_id() {
    let dir = TempDir::new().unwrap();

    habitual(&dir)
        .args(["done", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Habit 7 not found."));
}

#[test]
fn test_delete_removes_habit() {
    let dir = TempDir::new().unwrap();
    habitual(&dir).args(["add", "Exercise"]).assert().success();

    habitual(&dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Habit deleted."));

    habitual(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No habits yet"));
}

#[test]
fn test_rename() {
    let dir = TempDir::new().unwrap();
    habitual(&dir).args(["add", "Excercise"]).assert().success();

    habitual(&dir)
        .args(["rename", "1", "Exercise"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Habit name updated."));

    habitual(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exercise"));
}

#[test]
fn test_json_output_parses() {
    let dir = TempDir::new().unwrap();
    habitual(&dir).args(["add", "Exercise"]).assert().success();
    habitual(&dir).args(["done", "1"]).assert().success();

    let output = habitual(&dir)
        .args(["list", "--output", "json"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 1);
    assert_eq!(value["items"][0]["id"], 1);
    assert_eq!(value["items"][0]["completions"], 1);

    let output = habitual(&dir)
        .args(["streak", "1", "--output", "json"])
        .output()
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["current"], 1);
}

#[test]
fn test_export_writes_csv() {
    let dir = TempDir::new().unwrap();
    habitual(&dir).args(["add", "Exercise"]).assert().success();
    habitual(&dir).args(["done", "1"]).assert().success();

    let out = dir.path().join("export.csv");
    habitual(&dir)
        .args(["export", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 habit"));

    let content = std::fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Habit ID,Habit Name,Completion Dates"
    );
    assert!(lines.next().unwrap().starts_with("1,Exercise,"));
}

#[test]
fn test_export_empty_dataset_is_header_only() {
    let dir = TempDir::new().unwrap();

    let out = dir.path().join("export.csv");
    habitual(&dir)
        .args(["export", out.to_str().unwrap()])
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).unwrap();
    assert_eq!(content, "Habit ID,Habit Name,Completion Dates\n");
}

#[test]
fn test_corrupt_data_file_is_treated_as_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("habits.json"), "{broken").unwrap();

    habitual(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No habits yet"));

    // Adding over a corrupt file starts from a fresh dataset.
    habitual(&dir)
        .args(["add", "Exercise"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Habit added with id 1"));
}

#[test]
fn test_data_file_is_pretty_printed_json() {
    let dir = TempDir::new().unwrap();
    habitual(&dir).args(["add", "Exercise"]).assert().success();

    let content = std::fs::read_to_string(dir.path().join("habits.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["habits"][0]["id"], 1);
    assert!(value["completions"]["1"].is_array());
    assert!(content.contains("\n    \"habits\""));
}

#[test]
fn test_menu_add_and_exit() {
    let dir = TempDir::new().unwrap();

    habitual(&dir)
        .arg("menu")
        .write_stdin("1\nExercise\n2\n10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Habit added with id 1"))
        .stdout(predicate::str::contains("Exercise"))
        .stdout(predicate::str::contains("Exiting..."));
}

#[test]
fn test_menu_invalid_choice_redisplays() {
    let dir = TempDir::new().unwrap();

    habitual(&dir)
        .arg("menu")
        .write_stdin("42\n10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice"))
        .stdout(predicate::str::contains("Exiting..."));
}

#[test]
fn test_completions_generate() {
    let dir = TempDir::new().unwrap();

    habitual(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("habitual"));
}
