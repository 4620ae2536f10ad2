//! Integration tests for aster CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run_aster(args: &[&str], dir: &Path) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_aster"))
        .args(args)
        .current_dir(dir)
        .env_remove("ASTER_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn create_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn create_project(root: &Path) {
    create_file(&root.join("main.go"), "package main\n\n// entry\nfunc main() {}\n");
    create_file(
        &root.join("pkg/util.go"),
        "/* utilities\n   for main */\npackage pkg\n",
    );
    create_file(&root.join("pkg/run.sh"), "#!/bin/sh\necho hi\n");
    create_file(&root.join("vendor/dep.go"), "package dep\n");
    create_file(&root.join("empty.go"), "");
}

#[test]
fn test_cli_help() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_aster(&["--help"], temp.path());

    assert!(success);
    assert!(stdout.contains("aster"));
    assert!(stdout.contains("--extension"));
    assert!(stdout.contains("--exclude-dirs"));
    assert!(stdout.contains("--recursive"));
    assert!(stdout.contains("--aggregate"));
}

#[test]
fn test_cli_version() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_aster(&["--version"], temp.path());

    assert!(success);
    assert!(stdout.contains("aster"));
}

#[test]
fn test_no_arguments_shows_usage() {
    let temp = tempdir().unwrap();
    let (stdout, stderr, success) = run_aster(&[], temp.path());

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_per_file_output() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, _, success) = run_aster(&["main.go", "empty.go"], temp.path());

    assert!(success);
    assert_eq!(
        stdout,
        "\n\
         empty.go : Total 0 ; Code 0(0.00%) ; Comments 0(0.00%) ; Blank 0(0.00%)\n\
         main.go : Total 4 ; Code 2(50.00%) ; Comments 1(25.00%) ; Blank 1(25.00%)\n"
    );
}

#[test]
fn test_aggregate_output() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, _, success) = run_aster(&["-a", "main.go", "pkg/util.go"], temp.path());

    assert!(success);
    assert_eq!(
        stdout,
        "Total lines     7\n\n\
         Code lines      3 / 42.86%\n\
         Comments        3 / 42.86%\n\
         Blank lines     1 / 14.29%\n\n"
    );
}

#[test]
fn test_recursive_with_extension_and_exclusion() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, _, success) = run_aster(&["-r", "-e", "go", "-d", "vendor", "."], temp.path());

    assert!(success);
    assert!(stdout.contains("main.go : Total 4"));
    assert!(stdout.contains("util.go : Total 3"));
    assert!(stdout.contains("empty.go : Total 0"));
    assert!(!stdout.contains("dep.go"));
    assert!(!stdout.contains("run.sh"));
}

#[test]
fn test_directory_without_recursive_is_ignored() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, stderr, success) = run_aster(&["pkg"], temp.path());

    assert!(success);
    assert_eq!(stdout, "\n");
    assert!(stderr.is_empty());
}

#[test]
fn test_missing_file_warns_and_continues() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, stderr, success) = run_aster(&["missing.go", "main.go"], temp.path());

    assert!(success);
    assert!(stderr.contains("Warning, couldn't process file missing.go"));
    assert!(stdout.contains("main.go : Total 4"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_warns_and_continues() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempdir().unwrap();
    create_project(temp.path());
    let locked = temp.path().join("locked.go");
    create_file(&locked, "package locked\n");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Permission bits do not stop a privileged user
    if fs::read(&locked).is_ok() {
        return;
    }

    let (stdout, stderr, success) = run_aster(&["locked.go", "main.go"], temp.path());

    assert!(success);
    assert!(stderr.contains("Warning, couldn't process file locked.go : failed to read file"));
    assert!(!stdout.contains("locked.go"));
    assert!(stdout.contains("main.go : Total 4"));

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
}

#[test]
fn test_text_output_mode_matches_default() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (default_out, _, _) = run_aster(&["-a", "main.go"], temp.path());
    let (text_out, _, success) = run_aster(&["-a", "--output", "text", "main.go"], temp.path());

    assert!(success);
    assert_eq!(text_out, default_out);
    assert!(text_out.starts_with("Total lines     4\n\n"));
}

#[test]
fn test_json_output() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, _, success) = run_aster(
        &["-r", "-a", "-e", "sh", "--output", "json", "pkg"],
        temp.path(),
    );

    assert!(success);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("Invalid JSON output");
    assert_eq!(parsed["aggregation"], "total");
    assert_eq!(parsed["file_count"], 1);
    assert_eq!(parsed["total"]["code"], 1);
    assert_eq!(parsed["total"]["comment"], 1);
    assert_eq!(parsed["total"]["code_pct"], "50.00");
}

#[test]
fn test_invalid_output_format() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (_, stderr, success) = run_aster(&["--output", "csv", "main.go"], temp.path());

    assert!(!success);
    assert!(stderr.contains("csv"));
}
