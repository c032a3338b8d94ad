//! End-to-end tests: file on disk to rendered report.

use std::fs;

use rootdec::error::Error;
use rootdec::{decode_file, parse_file, render, JsonFormat, Keys, RootDecoder, RootEntry};
use tempfile::TempDir;

const TWO_ROOTS: &str = r#"{
    "keys": {
        "n": 4,
        "k": 3
    },
    "2": {
        "base": "2",
        "value": "111"
    },
    "1": {
        "base": "10",
        "value": "4"
    }
}
"#;

fn write_input(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("input.json");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_end_to_end_text_report() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, TWO_ROOTS);

    let text = rootdec::to_text(&path).unwrap();

    assert_eq!(
        text,
        "Parsed n = 4, k = 3\n\
         Parsed Roots:\n\
         Root ID 1: base = 10, value = 4, decimal = 4\n\
         Root ID 2: base = 2, value = 111, decimal = 7\n"
    );
}

#[test]
fn test_end_to_end_json_report() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, TWO_ROOTS);

    let json = rootdec::to_json(&path, JsonFormat::Compact).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["keys"]["n"], 4);
    assert_eq!(value["roots"][0]["id"], 1);
    assert_eq!(value["roots"][1]["decimal"], 7);
}

#[test]
fn test_parse_file_keeps_raw_values() {
    let dir = TempDir::new().unwrap();
    let path = write_input(&dir, TWO_ROOTS);

    let extraction = parse_file(&path).unwrap();
    assert_eq!(extraction.keys, Keys { n: 4, k: 3 });
    assert_eq!(extraction.roots.get(2), Some(&RootEntry::new(2, 2, "111")));
}

#[test]
fn test_crlf_and_blank_lines() {
    let dir = TempDir::new().unwrap();
    let content = TWO_ROOTS.replace('\n', "\r\n\r\n");
    let path = write_input(&dir, &content);

    let report = decode_file(&path).unwrap();
    assert_eq!(report.roots.len(), 2);
}

#[test]
fn test_hex_and_mixed_case_digits() {
    let dir = TempDir::new().unwrap();
    let content = r#"{
"keys": {
"n": 3,
"k": 2
},
"1": {
"base": "16",
"value": "1A"
},
"3": {
"base": "16",
"value": "fF"
},
"7": {
"base": "8",
"value": "17"
}
}"#;
    let path = write_input(&dir, content);

    let report = decode_file(&path).unwrap();
    let decimals: Vec<u64> = report.roots.iter().map(|r| r.decimal).collect();
    assert_eq!(decimals, vec![26, 255, 15]);
}

#[test]
fn test_builder_with_marker() {
    let dir = TempDir::new().unwrap();
    let content = TWO_ROOTS.replace("\"keys\"", "\"header\"");
    let path = write_input(&dir, &content);

    assert!(matches!(
        decode_file(&path),
        Err(Error::MarkerNotFound(_))
    ));

    let result = RootDecoder::new().with_marker("header").decode(&path).unwrap();
    assert_eq!(result.report().roots.len(), 2);
    assert!(render::to_text(result.report()).starts_with("Parsed n = 4, k = 3\n"));
}

#[test]
fn test_last_block_closed_on_value_line() {
    let text = "\"keys\": {\n\"n\": 1,\n\"k\": 1\n},\n\"2\": {\n\"base\": \"2\",\n\"value\": \"111\"}}\n";
    let report = rootdec::decode_str(text).unwrap();
    assert_eq!(report.root(2).unwrap().decimal, 7);
}

#[test]
fn test_value_line_with_trailing_base_text() {
    let text = "\"keys\": {\n\"n\": 1,\n\"k\": 1\n},\n\"2\": {\n\"base\": \"2\",\n\"value\": \"111\", \"base\": \"x\"\n}\n";
    let report = rootdec::decode_str(text).unwrap();
    assert_eq!(report.root(2).unwrap().decimal, 7);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = decode_file(dir.path().join("absent.json"));
    assert!(matches!(result, Err(Error::SourceUnavailable { .. })));
}
