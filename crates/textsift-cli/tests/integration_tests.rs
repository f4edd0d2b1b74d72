//! Tests running the `textsift` binary

use serde_json::Value;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::{NamedTempFile, TempDir};

/// Run the binary with an empty home directory and no config from the environment
fn textsift(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_textsift"))
        .args(args)
        .env("HOME", home)
        .env_remove("TEXTSIFT_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run textsift")
}

fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).unwrap_or_else(|e| {
        panic!("stdout is not a single JSON document ({}): {}", e, stdout)
    })
}

fn text_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_plain_text_file() {
    let home = TempDir::new().unwrap();
    let file = text_file("Apples are red. Apples are sweet!\nBananas are yellow.");
    let path = file.path().to_str().unwrap();

    let output = textsift(home.path(), &[path, "fruit.txt"]);

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(
        json["full_text"],
        "Apples are red. Apples are sweet! Bananas are yellow."
    );
    assert_eq!(json["sentences"].as_array().unwrap().len(), 3);
    assert_eq!(json["important_words"][0], "apples");
    assert_eq!(json["extraction_stats"]["extraction_method"], "plain-text");
    assert_eq!(json["extraction_stats"]["is_empty"], false);
    assert!(json.get("error").is_none());
}

#[test]
fn test_missing_file_exits_non_zero() {
    let home = TempDir::new().unwrap();
    let output = textsift(home.path(), &["/no/such/upload", "notes.txt"]);

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(json["extraction_stats"]["extraction_method"], "error");
    assert_eq!(json["extraction_stats"]["character_count"], 0);
    assert_eq!(json["extraction_stats"]["is_empty"], true);
    assert!(json["error"].as_str().unwrap().contains("File not found"));
}

#[test]
fn test_unsupported_type_is_not_a_crash() {
    let home = TempDir::new().unwrap();
    let file = text_file("whatever");
    let path = file.path().to_str().unwrap();

    let output = textsift(home.path(), &[path, "data.xyz"]);

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["extraction_stats"]["extraction_method"], "error");
    assert_eq!(json["error"], "Unsupported file type: .xyz");
    assert_eq!(json["full_text"], "Unsupported file type: .xyz");
    assert_eq!(json["sentences"], serde_json::json!(["Unsupported file type: .xyz"]));
}

#[test]
fn test_not_enough_arguments() {
    let home = TempDir::new().unwrap();
    let output = textsift(home.path(), &["only-a-path"]);

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert_eq!(
        json["error"],
        "Not enough arguments. Usage: textsift <file_path> <file_name>"
    );
    assert_eq!(json["sentences"], serde_json::json!([]));
}

#[test]
fn test_unknown_flag_is_reported_as_json() {
    let home = TempDir::new().unwrap();
    let output = textsift(home.path(), &["--frobnicate", "a", "b.txt"]);

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert!(json["error"].as_str().unwrap().contains("--frobnicate"));
}

#[test]
fn test_broken_config_file() {
    let home = TempDir::new().unwrap();
    let config = text_file("chunk_size = 0\n");
    let file = text_file("text");

    let output = textsift(
        home.path(),
        &[
            "--config",
            config.path().to_str().unwrap(),
            file.path().to_str().unwrap(),
            "a.txt",
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    assert!(json["error"].as_str().unwrap().contains("chunk_size"));
}

#[test]
fn test_config_from_home_directory() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".textsift");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "max_keywords = 1\n").unwrap();
    let file = text_file("alpha alpha beta gamma delta");

    let output = textsift(home.path(), &[file.path().to_str().unwrap(), "words.txt"]);

    let json = stdout_json(&output);
    assert_eq!(json["important_words"], serde_json::json!(["alpha"]));
}

#[test]
fn test_probe_reports_engines() {
    let home = TempDir::new().unwrap();
    let output = textsift(home.path(), &["--probe"]);

    assert!(output.status.success());
    let json = stdout_json(&output);
    for key in ["text_layer", "page_text", "ocr", "document_puller"] {
        assert!(json["engines"][key].is_boolean(), "missing {}", key);
    }
}

#[test]
fn test_pretty_output_and_quiet_logs() {
    let home = TempDir::new().unwrap();
    let file = text_file("Short note.");

    let output = textsift(
        home.path(),
        &["--pretty", "-q", file.path().to_str().unwrap(), "note.md"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\n  \"full_text\": \"Short note.\""));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("INFO"));
}
