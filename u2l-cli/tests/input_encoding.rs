use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_cp1252_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("latin.txt");
    fs::write(&input, b"caf\xe9\n").unwrap();

    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("--input-encoding")
        .arg("cp1252")
        .arg("-i")
        .arg(&input);

    cmd.assert().success().stdout("caf\\'{e}\n");
}

#[test]
fn test_short_alias() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("latin.txt");
    fs::write(&input, b"r\xe9sum\xe9").unwrap();

    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("--input-enc").arg("latin1").arg("-i").arg(&input);

    cmd.assert().success().stdout("r\\'{e}sum\\'{e}");
}

#[test]
fn test_auto_detects_utf16_bom() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("utf16.txt");
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "café".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(&input, bytes).unwrap();

    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("--input-encoding").arg("AUTO").arg("-i").arg(&input);

    cmd.assert().success().stdout("caf\\'{e}");
}

#[test]
fn test_auto_detects_utf8_bom_on_stdin() {
    let mut input = vec![0xEF, 0xBB, 0xBF];
    input.extend_from_slice("café résumé\n".as_bytes());

    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("--stdin")
        .arg("--input-encoding")
        .arg("AUTO")
        .write_stdin(input);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("caf\\'{e}"))
        .stdout(predicate::str::contains("r\\'{e}sum\\'{e}"));
}

#[test]
fn test_auto_detection_failure() {
    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("--stdin")
        .arg("--input-encoding")
        .arg("AUTO")
        .write_stdin(&b"caf\xe9"[..]);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("auto-detect"));
}

#[test]
fn test_unknown_encoding() {
    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("--input-encoding").arg("no-such-encoding").arg("x");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown encoding"));
}

#[test]
fn test_latex2unicode_reads_latin1() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("doc.tex");
    fs::write(&input, b"\\alpha \xe9").unwrap();

    let mut cmd = cargo_bin_cmd!("latex2unicode");
    cmd.arg("-G")
        .arg("--input-encoding")
        .arg("latin1")
        .arg("-i")
        .arg(&input);

    cmd.assert().success().stdout("\u{1D6FC} é");
}
