//! End-to-end tests for the textkit-cli binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn textkit() -> Command {
    let mut cmd = Command::cargo_bin("textkit-cli").unwrap();
    cmd.env_remove("TEXTKIT_CONFIG");
    cmd
}

#[test]
fn test_case_from_arguments() {
    textkit()
        .args(["case", "camel", "hello", "world"])
        .assert()
        .success()
        .stdout("helloWorld\n");
}

#[test]
fn test_case_from_stdin_lines() {
    textkit()
        .args(["case", "kebab"])
        .write_stdin("HelloWorld\nhello--world\n")
        .assert()
        .success()
        .stdout("hello-world\nhello-world\n");
}

#[test]
fn test_case_flags() {
    textkit()
        .args(["case", "camel", "--no-acronyms", "XML", "http", "request"])
        .assert()
        .success()
        .stdout("xmlHttpRequest\n");

    textkit()
        .args(["case", "pascal", "--no-digit-prefix", "123", "abc"])
        .assert()
        .success()
        .stdout("123Abc\n");
}

#[test]
fn test_unknown_style_is_rejected() {
    textkit()
        .args(["case", "snake", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown case style"));
}

#[test]
fn test_config_file_sets_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[case.camel]\ndigitPrefix = \"n\"").unwrap();

    textkit()
        .arg("--config")
        .arg(file.path())
        .args(["case", "camel", "1st", "place"])
        .assert()
        .success()
        .stdout("n1stPlace\n");
}

#[test]
fn test_basic_prompt() {
    textkit()
        .args([
            "prompt",
            "basic",
            "--task",
            "Summarize",
            "--constraint",
            "Be brief",
            "--input",
            "Long text",
        ])
        .assert()
        .success()
        .stdout("Task:\nSummarize\n\nConstraints:\n- Be brief\n\nInput:\nLong text\n");
}

#[test]
fn test_basic_prompt_without_task_fails() {
    textkit()
        .args(["prompt", "basic", "--input", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required field: task"));
}

#[test]
fn test_few_shot_prompt_from_stdin() {
    textkit()
        .args(["prompt", "few-shot", "--file", "-"])
        .write_stdin(r#"{"task": "Echo", "examples": [{"input": "a", "output": "a"}]}"#)
        .assert()
        .success()
        .stdout("Task:\nEcho\n\nExamples:\nExample 1:\nInput: a\nOutput: a\n");
}

#[test]
fn test_few_shot_prompt_without_examples_fails() {
    textkit()
        .args(["prompt", "few-shot", "--file", "-"])
        .write_stdin(r#"{"task": "Echo", "examples": []}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required field: examples"));
}

#[test]
fn test_config_command_prints_toml() {
    textkit()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[case.camel]"));
}
