//! Integration tests for the pysel binary's path handling.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn run_pysel(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pysel"))
        .args(args)
        .output()
        .unwrap()
}

/// A fresh scratch directory holding one trivial Python file.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pysel-cli-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("a.py"), "def f():\n    pass\n").unwrap();
    dir
}

#[test]
fn test_missing_first_path_is_fatal() {
    let output = run_pysel(&["def".as_ref(), "/no/such/path".as_ref()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no such file or directory"));
}

#[test]
fn test_missing_later_path_is_reported_and_skipped() {
    let dir = scratch_dir("later-path");
    let missing = dir.join("nowhere");
    let output = run_pysel(&["def".as_ref(), dir.as_ref(), missing.as_ref()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("a.py"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no such file or directory"));
}

#[test]
fn test_invalid_selector_is_fatal() {
    let dir = scratch_dir("bad-selector");
    let output = run_pysel(&["def:(".as_ref(), dir.as_ref()]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid selector"));
}
