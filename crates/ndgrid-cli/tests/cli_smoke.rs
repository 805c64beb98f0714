//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `ndgrid` binary to verify that argument
//! parsing, the demo flows, and error reporting work end-to-end.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("ndgrid").unwrap()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("random"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ndgrid"));
}

// ---------------------------------------------------------------------------
// show subcommand
// ---------------------------------------------------------------------------

#[test]
fn show_without_flags_runs_builtin_demo() {
    cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("rank 2 array, size 6, shape (3 x 2)"))
        .stdout(predicate::str::contains("[1.1, 2.2]"))
        .stderr(predicate::str::contains("built-in demo config"));
}

#[test]
fn show_reads_back_one_element() {
    cmd()
        .args(["show", "--at", "1,1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("element at [1, 1] = 4.4"));
}

#[test]
fn show_fill_value() {
    cmd()
        .args(["show", "--shape", "2x2", "--fill", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rank 2 array, size 4, shape (2 x 2)"))
        .stdout(predicate::str::contains("[7, 7]"));
}

#[test]
fn show_value_count_mismatch_errors() {
    cmd()
        .args(["show", "--shape", "3x2", "--values", "1,2,3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot initialise"));
}

#[test]
fn show_bad_shape_errors() {
    cmd()
        .args(["show", "--shape", "3xx2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid extent"));
}

#[test]
fn show_rank_five_unsupported() {
    cmd()
        .args(["show", "--shape", "1x1x1x1x1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ranks are 1 through 4"));
}

#[test]
fn show_out_of_bounds_read_errors() {
    cmd()
        .args(["show", "--at", "3,0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of bounds"));
}

#[test]
fn show_loads_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.json");
    std::fs::write(&path, r#"{"shape": [2, 2], "fill": 5.0}"#).unwrap();

    cmd()
        .args(["show", "--config", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("rank 2 array, size 4, shape (2 x 2)"))
        .stdout(predicate::str::contains("[5, 5]"));
}

// ---------------------------------------------------------------------------
// random subcommand
// ---------------------------------------------------------------------------

#[test]
fn random_requires_shape() {
    cmd().arg("random").assert().failure();
}

#[test]
fn random_prints_grid_of_requested_shape() {
    cmd()
        .args(["random", "--shape", "2x3", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rank 2 array, size 6, shape (2 x 3)"));
}

#[test]
fn random_with_seed_is_reproducible() {
    let first = cmd()
        .args(["random", "--shape", "2x2", "--seed", "7"])
        .output()
        .unwrap();
    let second = cmd()
        .args(["random", "--shape", "2x2", "--seed", "7"])
        .output()
        .unwrap();
    assert_eq!(first.stdout, second.stdout);
}
