use std::fs;
use std::process::Command;

use serde_json::Value;

#[test]
fn generates_header_and_json_summary() {
    let exe = env!("CARGO_BIN_EXE_lexigen");
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("dictionary_words.h");

    let run = Command::new(exe)
        .args([
            output.to_str().unwrap(),
            "--count",
            "50",
            "--quiet",
            "--json",
        ])
        .output()
        .expect("failed to run lexigen");
    assert!(run.status.success());

    let json: Value = serde_json::from_slice(&run.stdout).unwrap();
    assert_eq!(json["target_count"].as_u64().unwrap(), 50);
    assert_eq!(json["words_emitted"].as_u64().unwrap(), 50);
    assert_eq!(json["sample"].as_array().unwrap().len(), 20);

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("const char* DICTIONARY_WORDS[50] = {"));
    assert!(text.starts_with("#ifndef DICTIONARY_WORDS_H"));
    assert!(text.trim_end().ends_with("#endif // DICTIONARY_WORDS_H"));
}

#[test]
fn rerun_overwrites_existing_artifact() {
    let exe = env!("CARGO_BIN_EXE_lexigen");
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("words.h");

    fs::write(&output, "stale contents").unwrap();

    let run = Command::new(exe)
        .args([output.to_str().unwrap(), "--count", "10", "--quiet"])
        .output()
        .expect("failed to run lexigen");
    assert!(run.status.success());

    let text = fs::read_to_string(&output).unwrap();
    assert!(!text.contains("stale contents"));
    assert!(text.contains("const char* DICTIONARY_WORDS[10] = {"));
}

#[test]
fn custom_array_name_renames_guards_and_declaration() {
    let exe = env!("CARGO_BIN_EXE_lexigen");
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("custom.h");

    let run = Command::new(exe)
        .args([
            output.to_str().unwrap(),
            "--count",
            "5",
            "--array-name",
            "word_table",
            "--quiet",
        ])
        .output()
        .expect("failed to run lexigen");
    assert!(run.status.success());

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("#ifndef WORD_TABLE_H"));
    assert!(text.contains("const char* word_table[5] = {"));
}

#[test]
fn exhausted_catalog_exits_nonzero_without_artifact() {
    let exe = env!("CARGO_BIN_EXE_lexigen");
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("never.h");

    let run = Command::new(exe)
        .args([
            output.to_str().unwrap(),
            "--count",
            "1000000",
            "--max-attempts",
            "10",
            "--quiet",
        ])
        .output()
        .expect("failed to run lexigen");
    assert!(!run.status.success());

    let stderr = String::from_utf8_lossy(&run.stderr);
    assert!(stderr.contains("generation failed"), "stderr: {stderr}");
    assert!(!output.exists(), "failed run must leave no artifact");
}

#[test]
fn invalid_array_name_is_rejected() {
    let exe = env!("CARGO_BIN_EXE_lexigen");
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("bad.h");

    let run = Command::new(exe)
        .args([
            output.to_str().unwrap(),
            "--count",
            "5",
            "--array-name",
            "9lives",
            "--quiet",
        ])
        .output()
        .expect("failed to run lexigen");
    assert!(!run.status.success());
    assert!(!output.exists());
}
