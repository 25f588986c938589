use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_file_sets_options() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(
        &config,
        "[unicode2latex]\naccent_mode = \"math\"\nconvert_dashes = true\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("--config").arg(&config).arg("é–");

    cmd.assert().success().stdout("\\acute{e}--\n");
}

#[test]
fn test_flag_overrides_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[unicode2latex]\naccent_mode = \"math\"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("--config")
        .arg(&config)
        .arg("--accent-mode")
        .arg("text")
        .arg("é");

    cmd.assert().success().stdout("\\'{e}\n");
}

#[test]
fn test_local_config_is_picked_up() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("u2l.toml"),
        "[unicode2latex.overrides]\n\"U+00B0\" = \"\\\\textdegree\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.current_dir(dir.path()).arg("90°");

    cmd.assert().success().stdout("90\\textdegree \n");
}

#[test]
fn test_reverse_config_enables_tables() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(
        &config,
        "[latex2unicode]\ngreek = true\n\n[latex2unicode.custom]\n\"\\\\degree\" = \"°\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("latex2unicode");
    cmd.arg("--config").arg(&config).arg("\\alpha=90\\degree");

    cmd.assert().success().stdout("\u{1D6FC}=90°\n");
}

#[test]
fn test_explicit_definition_file() {
    let dir = tempdir().unwrap();
    let table = dir.path().join("table.tex");
    fs::write(
        &table,
        "\\UnicodeMathSymbol{\"02605}{\\bigstar                  }{\\mathord}{black star}%\n",
    )
    .unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(
        &config,
        format!(
            "[definitions]\nsearch_system = false\npaths = [{:?}]\n",
            table.display().to_string()
        ),
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("--config").arg(&config).arg("★ ∩");

    // Without system files only the seed and the explicit table are known.
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("\\bigstar  "));
}

#[test]
fn test_missing_config_file() {
    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("--config").arg("/nonexistent/u2l.toml").arg("x");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_unreadable_definition_path() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(
        &config,
        "[definitions]\nsearch_system = false\npaths = [\"/nonexistent/table.tex\"]\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("unicode2latex");
    cmd.arg("--config").arg(&config).arg("x");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("cannot read definitions"));
}
