//! End-to-end tests: run the proflog binary against a profile.log in a temp dir

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn workdir_with_log(contents: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("profile.log"), contents).unwrap();
    dir
}

fn proflog_in(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("proflog");
    cmd.current_dir(dir);
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("proflog");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_scripts_and_functions_sorted() {
    let dir = workdir_with_log(
        "SCRIPT alpha.py\n\
         Total time: 2.5\n\
         FUNCTION foo\n\
         Total time: 1.0\n\
         SCRIPT beta.py\n\
         Total time: 5.0\n",
    );

    proflog_in(dir.path())
        .assert()
        .success()
        .stdout("SCRIPT beta.py 5.0\nSCRIPT alpha.py 2.5\n\nFUNCTION foo 1.0\n");
}

#[test]
fn test_orphan_measurement_is_dropped() {
    let dir = workdir_with_log("Total time: 9.9\nFUNCTION bar\nTotal time: 0.5\n");

    proflog_in(dir.path())
        .assert()
        .success()
        .stdout("\nFUNCTION bar 0.5\n")
        .stderr("");
}

#[test]
fn test_function_section_capped_at_fifty() {
    let log: String = (1..=60)
        .map(|i| format!("FUNCTION f{i}\nTotal time: {i}.5\n"))
        .collect();
    let dir = workdir_with_log(&log);

    let output = proflog_in(dir.path()).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "");
    let functions = &lines[1..];
    assert_eq!(functions.len(), 50);
    assert_eq!(functions[0], "FUNCTION f60 60.5");
    assert_eq!(functions[49], "FUNCTION f11 11.5");
}

#[test]
fn test_tied_scripts_keep_file_order() {
    let dir = workdir_with_log("SCRIPT s1\nTotal time: 3.0\nSCRIPT s2\nTotal time: 3.0\n");

    proflog_in(dir.path())
        .assert()
        .success()
        .stdout("SCRIPT s1 3.0\nSCRIPT s2 3.0\n\n");
}

#[test]
fn test_malformed_measurement_prints_no_report() {
    let dir = workdir_with_log("SCRIPT ok\nTotal time: 1.0\nSCRIPT bad\nTotal time: notanumber\n");

    proflog_in(dir.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("line 4"))
        .stderr(predicate::str::contains("notanumber"));
}

#[test]
fn test_empty_file_prints_blank_line() {
    let dir = workdir_with_log("");

    proflog_in(dir.path()).assert().success().stdout("\n");
}

#[test]
fn test_missing_log_fails() {
    let dir = TempDir::new().unwrap();

    proflog_in(dir.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("profile.log"));
}

#[test]
fn test_explicit_log_path() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("vim.log"), "SCRIPT x\nTotal time: 0.25\n").unwrap();

    proflog_in(dir.path())
        .arg("vim.log")
        .assert()
        .success()
        .stdout("SCRIPT x 0.25\n\n");
}

#[test]
fn test_json_format() {
    let dir = workdir_with_log("SCRIPT x\nTotal time: 0.25\nFUNCTION f\nTotal time: 1e-05\n");

    let output = proflog_in(dir.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["scripts"][0]["label"], "SCRIPT x");
    assert_eq!(value["functions"][0]["total_time_secs"], 1e-5);
}

#[test]
fn test_csv_format() {
    let dir = workdir_with_log("SCRIPT x\nTotal time: 0.25\nFUNCTION f\nTotal time: 1e-05\n");

    proflog_in(dir.path())
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout("group,label,total_time_secs\nscript,SCRIPT x,0.25\nfunction,FUNCTION f,1e-05\n");
}

#[test]
fn test_config_file_sets_format() {
    let dir = workdir_with_log("SCRIPT x\nTotal time: 2.0\n");
    fs::write(dir.path().join("proflog.toml"), "format = \"csv\"\n").unwrap();

    proflog_in(dir.path())
        .args(["--config", "proflog.toml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("group,label,total_time_secs\n"));
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let dir = workdir_with_log("SCRIPT x\nTotal time: 2.0\n");

    proflog_in(dir.path())
        .arg("--debug")
        .assert()
        .success()
        .stdout("SCRIPT x 2.0\n\n")
        .stderr(predicate::str::contains("Parsed profile log"));
}
