use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_text_arguments_one_per_line() {
    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("café").arg("x ∩ y");

    cmd.assert()
        .success()
        .stdout("caf\\'{e}\nx \\cap  y\n");
}

#[test]
fn test_file_input_keeps_lines() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, "résumé\nA ⊆ B\n").unwrap();

    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("-i").arg(&input);

    cmd.assert()
        .success()
        .stdout("r\\'{e}sum\\'{e}\nA \\subseteq  B\n");
}

#[test]
fn test_stdin_to_output_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.tex");

    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("--stdin")
        .arg("-o")
        .arg(&output)
        .write_stdin("naïve\n");

    cmd.assert().success().stdout("");
    assert_eq!(fs::read_to_string(&output).unwrap(), "na\\\"{i}ve\n");
}

#[test]
fn test_dash_output_means_stdout() {
    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("-o").arg("-").arg("é");

    cmd.assert().success().stdout("\\'{e}\n");
}

#[test]
fn test_no_input_prints_help_and_fails() {
    let mut cmd = cargo_bin_cmd!("unicode2latex");

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("exactly one"));
}

#[test]
fn test_two_inputs_fail() {
    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("--stdin").arg("text");

    cmd.assert().failure().code(1);
}

#[test]
fn test_missing_input_file() {
    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("-i").arg("/nonexistent/input.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file"));
}

#[test]
fn test_quotes_and_dashes() {
    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("--convert-quotes")
        .arg("--convert-dashes")
        .arg("“a”–‘b’—c");

    cmd.assert().success().stdout("``a''--`b'---c\n");
}

#[test]
fn test_accent_mode_math() {
    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("--accent-mode").arg("math").arg("é");

    cmd.assert().success().stdout("\\acute{e}\n");
}

#[test]
fn test_invalid_accent_mode() {
    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("--accent-mode").arg("bogus").arg("é");

    cmd.assert().failure();
}

#[test]
fn test_no_accents() {
    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("--no-accents").arg("é");

    cmd.assert().success().stdout("é\n");
}

#[test]
fn test_no_fonts() {
    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("--no-fonts").arg("\u{1D431}");

    cmd.assert().success().stdout("x\n");
}

#[test]
fn test_unconvertible_character_warns() {
    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("\u{1F600}");

    cmd.assert()
        .success()
        .stdout("\u{1F600}\n")
        .stderr(predicate::str::contains("'cmdline':1:1"));
}

#[test]
fn test_accent_without_base_warns() {
    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("\u{301}x");

    cmd.assert()
        .success()
        .stdout("\\'{ }x\n")
        .stderr(predicate::str::contains("'cmdline':1:1"))
        .stderr(predicate::str::contains("with no preceding base"));
}

#[test]
fn test_unsupported_compat_decomposition_warns() {
    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("\u{A8}");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("unsupported <compat> decomposition"));
}

#[test]
fn test_unsupported_modifier_warns() {
    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("\u{338F}");

    cmd.assert()
        .success()
        .stdout("\u{338F}\n")
        .stderr(predicate::str::contains("unsupported modifier '<square>'"));
}

#[test]
fn test_unknown_accent_pair_warns() {
    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("\u{FB1D}");

    cmd.assert()
        .success()
        .stdout("\u{FB1D}\n")
        .stderr(predicate::str::contains("unsupported decomposition"));
}

#[test]
fn test_verbose_flag_is_accepted() {
    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("-vv").arg("∩");

    cmd.assert().success().stdout("\\cap \n");
}

#[test]
fn test_dump_tables() {
    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("--dump-tables");

    let output = cmd.assert().success().get_output().stdout.clone();
    let tables: serde_json::Value = serde_json::from_slice(&output).unwrap();
    for key in [
        "math",
        "math_macros",
        "math_accents",
        "math_accent_macros",
        "greek_macros",
        "replacements",
    ] {
        assert!(tables.get(key).is_some(), "missing {key}");
    }
    assert_eq!(tables["math_macros"]["\\cap"][0], "∩");
}
