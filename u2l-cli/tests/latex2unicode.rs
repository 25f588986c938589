use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_without_tables_is_identity() {
    let mut cmd = cargo_bin_cmd!("latex2unicode");
    cmd.arg("\\alpha \\cap x");

    cmd.assert().success().stdout("\\alpha \\cap x\n");
}

#[test]
fn test_math_and_greek_flags() {
    let mut cmd = cargo_bin_cmd!("latex2unicode");
    cmd.arg("-M").arg("-G").arg("A \\cap B").arg("\\alpha");

    cmd.assert().success().stdout("A ∩ B \u{1D6FC}\n");
}

#[test]
fn test_greek_only() {
    let mut cmd = cargo_bin_cmd!("latex2unicode");
    cmd.arg("--greek").arg("\\beta\\cup");

    cmd.assert().success().stdout("\u{1D6FD}\\cup\n");
}

#[test]
fn test_file_input_is_converted_whole() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.tex");
    fs::write(&input, "% \\cap stays\n$x \\in A$\n").unwrap();

    let mut cmd = cargo_bin_cmd!("latex2unicode");
    cmd.arg("-M").arg("-i").arg(&input);

    cmd.assert().success().stdout("% \\cap stays\n$x ∈ A$\n");
}

#[test]
fn test_stdin_and_output_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.txt");

    let mut cmd = cargo_bin_cmd!("latex2unicode");
    cmd.arg("-M")
        .arg("--stdin")
        .arg("--output")
        .arg(&output)
        .write_stdin("a \\to b");

    cmd.assert().success();
    assert_eq!(fs::read_to_string(&output).unwrap(), "a → b");
}

#[test]
fn test_no_input_fails() {
    let mut cmd = cargo_bin_cmd!("latex2unicode");
    cmd.arg("-M");

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}
