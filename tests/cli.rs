//! Binary-level tests for the gramdoc command.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn grammar_file(source: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", source).unwrap();
    file
}

#[test]
fn markdown_to_stdout_by_default() {
    let file = grammar_file("grammar T; a : 'x' | b ; b : 'y' ;");
    Command::cargo_bin("gramdoc")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("**_a_**"))
        .stdout(predicate::str::contains("_[b](#grammar-rule-b)_"));
}

#[test]
fn ebnf_format_flag() {
    let file = grammar_file("grammar T; a : 'x' ;");
    Command::cargo_bin("gramdoc")
        .unwrap()
        .arg(file.path())
        .args(["--format", "ebnf"])
        .assert()
        .success()
        .stdout("a ::= 'x'\n");
}

#[test]
fn anchors_flag_wraps_rules() {
    let file = grammar_file("grammar T; a : 'x' ;");
    Command::cargo_bin("gramdoc")
        .unwrap()
        .arg(file.path())
        .arg("--anchors")
        .assert()
        .success()
        .stdout(predicate::str::contains("<div id=\"grammar-rule-a\">"));
}

#[test]
fn output_file_flag() {
    let file = grammar_file("grammar T; a : 'x' ;");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("grammar.ebnf");
    Command::cargo_bin("gramdoc")
        .unwrap()
        .arg(file.path())
        .args(["--format", "ebnf"])
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout("");
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "a ::= 'x'\n");
}

#[test]
fn missing_input_fails() {
    Command::cargo_bin("gramdoc")
        .unwrap()
        .arg("no-such-grammar.g4")
        .assert()
        .failure();
}

#[test]
fn malformed_grammar_fails() {
    let file = grammar_file("grammar T; a : ");
    Command::cargo_bin("gramdoc")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure();
}
