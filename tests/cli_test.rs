use serde_json::Value;
use std::io::Write;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

const RAW_KEY: &str = "sk-cli-abcdefghijklmnopqrstuvwxyz";

fn openai_key(key: Option<&str>, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_openai-key"));
    cmd.args(args)
        .env_remove("OPENAI_API_KEY")
        .env_remove("OPENAI_MODEL")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    if let Some(k) = key {
        cmd.env("OPENAI_API_KEY", k);
    }
    cmd.output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_missing_key_exits_with_configuration_code() {
    let output = openai_key(None, &[]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("OPENAI_API_KEY is not set"));
    assert!(err.contains("export OPENAI_API_KEY"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_missing_key_is_logged_without_rust_log() {
    let err = stderr(&openai_key(None, &[]));

    assert!(err.contains("Checking OPENAI_API_KEY"));
    assert!(err.contains("Missing configuration: environment variable OPENAI_API_KEY must be set"));
    assert!(err.contains("Recovery suggestion"));
}

#[test]
fn test_empty_key_counts_as_missing() {
    let output = openai_key(Some(""), &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("OPENAI_API_KEY"));
}

#[test]
fn test_json_report_masks_key() {
    let output = openai_key(Some(RAW_KEY), &["--json"]);
    assert!(output.status.success());

    let report: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["OPENAI_API_KEY"], "sk-...wxyz");
    assert_eq!(report["OPENAI_MODEL"], "gpt-3.5-turbo");
    assert_eq!(report["source"], "env");

    assert!(!stdout(&output).contains(RAW_KEY));
    assert!(!stderr(&output).contains(RAW_KEY));
}

#[test]
fn test_verbose_output_never_shows_raw_key() {
    let output = openai_key(Some(RAW_KEY), &["--verbose"]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("OPENAI_API_KEY is set (sk-...wxyz)"));
    assert!(!out.contains(RAW_KEY));
    assert!(!stderr(&output).contains(RAW_KEY));
}

#[test]
fn test_config_file_supplies_missing_key() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[environment]\nOPENAI_API_KEY = \"{}\"\nOPENAI_MODEL = \"gpt-4o\"", RAW_KEY).unwrap();
    let path = file.path().display().to_string();

    let output = openai_key(None, &["--config", &path]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(out.contains("Model: gpt-4o"));
    assert!(out.contains(&format!("Source: toml:{}", path)));
    assert!(!out.contains(RAW_KEY));
    assert!(!stderr(&output).contains(RAW_KEY));
}

#[test]
fn test_non_toml_config_is_rejected() {
    let file = NamedTempFile::new().unwrap();
    let path = file.path().display().to_string();

    let output = openai_key(Some(RAW_KEY), &["--config", &path]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Option config is invalid"));
}
