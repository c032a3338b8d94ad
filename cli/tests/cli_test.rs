//! Integration tests for the rootdec binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const VALID: &str = r#"{
    "keys": {
        "n": 4,
        "k": 3
    },
    "1": {
        "base": "10",
        "value": "4"
    },
    "2": {
        "base": "2",
        "value": "111"
    }
}
"#;

const MISSING_BASE: &str = r#"{
    "keys": {
        "n": 4,
        "k": 3
    },
    "2": {
        "value": "111"
    }
}
"#;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rootdec"))
        .args(args)
        .current_dir(dir)
        .env_remove("ROOTDEC_INPUT")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

#[test]
fn test_default_input_prints_report() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("input.json"), VALID).unwrap();

    let output = run(dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Parsed n = 4, k = 3\n\
         Parsed Roots:\n\
         Root ID 1: base = 10, value = 4, decimal = 4\n\
         Root ID 2: base = 2, value = 111, decimal = 7\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn test_compact_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("roots.json"), VALID).unwrap();

    let output = run(dir.path(), &["roots.json", "--compact"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("\"decimal\":7"));
}

#[test]
fn test_malformed_block_reports_one_line_and_exits_1() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("input.json"), MISSING_BASE).unwrap();

    let output = run(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.contains("Missing base for root 2"));
}

#[test]
fn test_missing_input_exits_1() {
    let dir = TempDir::new().unwrap();

    let output = run(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.contains("input.json"));
}
