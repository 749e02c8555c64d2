use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn roster_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("--dir").arg(dir);
    cmd
}

#[test]
fn add_persists_across_invocations() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster_cmd(temp_dir.path())
        .args(["add", "STU001", "Alice", "20", "A"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Student added"));

    // A fresh process must see the record via the data file.
    roster_cmd(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("STU001"))
        .stdout(predicates::str::contains("Alice"));
}

#[test]
fn duplicate_id_is_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster_cmd(temp_dir.path())
        .args(["add", "STU001", "Alice", "20", "A"])
        .assert()
        .success();

    roster_cmd(temp_dir.path())
        .args(["add", "STU001", "Bob", "19", "B"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("already exists"));
}

#[test]
fn out_of_range_age_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster_cmd(temp_dir.path())
        .args(["add", "STU001", "Alice", "200", "A"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Age must be between 0 and 150"));

    roster_cmd(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No students found."));
}

#[test]
fn update_keeps_unspecified_fields() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster_cmd(temp_dir.path())
        .args(["add", "STU001", "Alice", "20", "A"])
        .assert()
        .success();

    roster_cmd(temp_dir.path())
        .args(["update", "STU001", "--age", "21"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Student updated"));

    roster_cmd(temp_dir.path())
        .args(["get", "STU001"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Alice"))
        .stdout(predicates::str::contains("21"));
}

#[test]
fn delete_then_get_reports_not_found() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster_cmd(temp_dir.path())
        .args(["add", "STU001", "Alice", "20", "A"])
        .assert()
        .success();

    roster_cmd(temp_dir.path())
        .args(["delete", "STU001"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Student deleted"));

    roster_cmd(temp_dir.path())
        .args(["get", "STU001"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Student not found"));
}

#[test]
fn stats_over_two_students() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster_cmd(temp_dir.path())
        .args(["add", "STU001", "Alice", "20", "A"])
        .assert()
        .success();
    roster_cmd(temp_dir.path())
        .args(["add", "STU002", "Bob", "19", "B"])
        .assert()
        .success();

    roster_cmd(temp_dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicates::str::contains("Total students: 2"))
        .stdout(predicates::str::contains("Average age: 19.5"))
        .stdout(predicates::str::contains("Age range: 19 - 20"))
        .stdout(predicates::str::contains("A: 1"))
        .stdout(predicates::str::contains("B: 1"));
}

#[test]
fn malformed_data_file_warns_and_starts_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("students.json"), "[{ broken").unwrap();

    roster_cmd(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stderr(predicates::str::contains("could not load roster data"))
        .stdout(predicates::str::contains("No students found."));
}

#[test]
fn passwd_digits_only() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster_cmd(temp_dir.path())
        .args(["passwd", "--length", "12", "--class", "digits"])
        .assert()
        .success()
        .stdout(predicates::str::is_match("^[0-9]{12}\n$").unwrap());
}

#[test]
fn passwd_batch_is_numbered() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster_cmd(temp_dir.path())
        .args(["passwd", "--count", "3", "--length", "8"])
        .assert()
        .success()
        .stdout(predicates::str::contains(" 1: "))
        .stdout(predicates::str::contains(" 3: "));
}

#[test]
fn passwd_rejects_unknown_class() {
    let temp_dir = tempfile::tempdir().unwrap();

    roster_cmd(temp_dir.path())
        .args(["passwd", "--class", "emoji"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Unknown character class"));
}
