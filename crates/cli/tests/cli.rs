// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! End-to-end tests running the `quizsmith` binary.

#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const VALID_QUIZ: &str = r#"{
  "questions": [
    {
      "question": "What does HTTP stand for?",
      "type": "mcq",
      "options": [
        "HyperText Transfer Protocol",
        "High Transfer Text Process",
        "Host Transfer Protocol",
        "Hyper Tool Transport"
      ],
      "correct_index": 0,
      "feedback": {
        "0": "Right expansion.",
        "1": "Not a real expansion.",
        "2": "Host is not part of it.",
        "3": "Tool is not part of it.",
        "correct": "HTTP is HyperText Transfer Protocol."
      }
    }
  ]
}"#;

fn write_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// The binary with an empty config home and no inherited overrides.
fn quizsmith(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("quizsmith").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("QUIZSMITH_CONFIG")
        .env_remove("QUIZSMITH_NOTICE_MS")
        .env_remove("RUST_LOG");
    cmd
}

mod prompt {
    use super::*;

    #[test]
    fn test_hard_prompt_without_true_false() {
        let home = TempDir::new().unwrap();
        quizsmith(&home)
            .args(["prompt", "-n", "10", "-d", "hard"])
            .assert()
            .success()
            .stdout(predicate::str::contains("- Produce EXACTLY 10 questions TOTAL."))
            .stdout(predicate::str::contains(
                "Do NOT include any true/false questions. Every question must have \"type\": \"mcq\".",
            ))
            .stdout(predicate::str::contains("- Difficulty: hard."));
    }

    #[test]
    fn test_count_is_clamped() {
        let home = TempDir::new().unwrap();
        quizsmith(&home)
            .args(["prompt", "-n", "0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("EXACTLY 1 questions TOTAL"));
    }

    #[test]
    fn test_config_file_supplies_defaults() {
        let home = TempDir::new().unwrap();
        let config = write_file("questions = 7\ndifficulty = \"easy\"\ntrue_false = true\n");
        quizsmith(&home)
            .args(["--config", config.path().to_str().unwrap(), "prompt"])
            .assert()
            .success()
            .stdout(predicate::str::contains("EXACTLY 7 questions TOTAL"))
            .stdout(predicate::str::contains("- Difficulty: easy."))
            .stdout(predicate::str::contains("You MAY include true/false questions"));
    }

    #[test]
    fn test_flags_override_config_file() {
        let home = TempDir::new().unwrap();
        let config = write_file("questions = 7\ntrue_false = true\n");
        quizsmith(&home)
            .env("QUIZSMITH_CONFIG", config.path())
            .args(["prompt", "-n", "3", "--no-true-false"])
            .assert()
            .success()
            .stdout(predicate::str::contains("EXACTLY 3 questions TOTAL"))
            .stdout(predicate::str::contains("Do NOT include any true/false questions"));
    }

    #[test]
    fn test_unknown_config_key_is_rejected() {
        let home = TempDir::new().unwrap();
        let config = write_file("questoins = 7\n");
        quizsmith(&home)
            .args(["--config", config.path().to_str().unwrap(), "prompt"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("questoins"));
    }
}

mod check {
    use super::*;

    #[test]
    fn test_valid_file() {
        let home = TempDir::new().unwrap();
        let quiz = write_file(VALID_QUIZ);
        quizsmith(&home)
            .args(["check", quiz.path().to_str().unwrap()])
            .assert()
            .success()
            .stdout("Valid quiz: 1 questions.\n");
    }

    #[test]
    fn test_invalid_stdin_lists_errors() {
        let home = TempDir::new().unwrap();
        quizsmith(&home)
            .arg("check")
            .write_stdin(r#"{"questions": [{"question": "q", "options": ["a"], "correct_index": 0}]}"#)
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::starts_with("Validation errors\n"))
            .stdout(predicate::str::contains("questions[0].options"));
    }

    #[test]
    fn test_json_report_for_malformed_input() {
        let home = TempDir::new().unwrap();
        let output = quizsmith(&home)
            .args(["check", "--output-format", "json"])
            .write_stdin("```json\n{}\n```")
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(1));
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["valid"], false);
        assert!(report["parse_error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON. Make sure it is JSON ONLY."));
    }

    #[test]
    fn test_missing_file() {
        let home = TempDir::new().unwrap();
        quizsmith(&home)
            .args(["check", "/nonexistent/quiz.json"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error: failed to read /nonexistent/quiz.json"));
    }
}

mod take {
    use super::*;

    #[test]
    fn test_scripted_correct_answer() {
        let home = TempDir::new().unwrap();
        let quiz = write_file(VALID_QUIZ);
        quizsmith(&home)
            .args(["take", quiz.path().to_str().unwrap(), "--answers", "a"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1) What does HTTP stand for?"))
            .stdout(predicate::str::contains("(x) A. HyperText Transfer Protocol  [correct]"))
            .stdout(predicate::str::contains("  HTTP is HyperText Transfer Protocol."))
            .stdout(predicate::str::ends_with("Score: 1/1\n"));
    }

    #[test]
    fn test_answers_read_from_stdin() {
        let home = TempDir::new().unwrap();
        let quiz = write_file(VALID_QUIZ);
        quizsmith(&home)
            .args(["take", quiz.path().to_str().unwrap()])
            .write_stdin("3\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("(x) C. Host Transfer Protocol  [wrong]"))
            .stdout(predicate::str::contains("  Host is not part of it."))
            .stdout(predicate::str::contains("  Why the correct answer is correct:"))
            .stdout(predicate::str::ends_with("Score: 0/1\n"));
    }

    #[test]
    fn test_wrong_answer_count() {
        let home = TempDir::new().unwrap();
        let quiz = write_file(VALID_QUIZ);
        quizsmith(&home)
            .args(["take", quiz.path().to_str().unwrap(), "--answers", "a,b"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("2 answers given for 1 questions"));
    }
}

#[test]
fn test_schema_prints_example() {
    let home = TempDir::new().unwrap();
    let output = quizsmith(&home).arg("schema").output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["questions"][0]["type"], "mcq");
    assert_eq!(value["questions"][0]["options"].as_array().unwrap().len(), 4);
}

#[test]
fn test_file_and_paste_conflict() {
    let home = TempDir::new().unwrap();
    quizsmith(&home)
        .args(["check", "quiz.json", "--paste"])
        .assert()
        .failure()
        .code(2);
}
