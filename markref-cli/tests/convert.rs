use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("markref")
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn convert_html_to_markdown_via_cli() {
    let expected = fs::read_to_string(fixture_path("article.md")).unwrap();

    let mut cmd = cargo_bin_cmd!("markref");
    cmd.arg("convert").arg(fixture_path("article.html"));
    cmd.assert().success().stdout(expected);
}

#[test]
fn convert_is_the_default_command() {
    let mut cmd = cargo_bin_cmd!("markref");
    cmd.arg(fixture_path("article.html")).arg("--to").arg("text");
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Border attack\nMilitants struck"));
}

#[test]
fn convert_single_line_text_with_extra_param() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("page.html");
    fs::write(&input, "<p>One</p><p>Two</p>").unwrap();

    let mut cmd = cargo_bin_cmd!("markref");
    cmd.arg("convert")
        .arg(&input)
        .arg("--to")
        .arg("text")
        .arg("--extra-line-feeds")
        .arg("false");
    cmd.assert().success().stdout("One Two ");
}

#[test]
fn convert_picks_sink_from_output_extension() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("fragments.json");

    let mut cmd = cargo_bin_cmd!("markref");
    cmd.arg("convert")
        .arg(fixture_path("article.html"))
        .arg("-o")
        .arg(&output)
        .arg("--extra-default-title")
        .arg("Border attack");
    cmd.assert().success().stdout("");

    let json = fs::read_to_string(&output).unwrap();
    let fragments: serde_json::Value = serde_json::from_str(&json).unwrap();
    let last = fragments.as_array().and_then(|f| f.last()).cloned().unwrap();
    assert_eq!(last["kind"], "title");
    assert_eq!(last["text"], "Border attack");
}

#[test]
fn convert_reads_stdin() {
    let mut cmd = cargo_bin_cmd!("markref");
    cmd.arg("convert")
        .arg("-")
        .write_stdin("Hello   world\n\nSecond *line*\n");
    cmd.assert()
        .success()
        .stdout("Hello world\n\nSecond \\*line\\*\n\n");
}

#[test]
fn convert_unknown_sink_fails() {
    let mut cmd = cargo_bin_cmd!("markref");
    cmd.arg("convert")
        .arg(fixture_path("article.html"))
        .arg("--to")
        .arg("pdf");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Sink 'pdf' not found"));
}

#[test]
fn convert_missing_file_fails() {
    let mut cmd = cargo_bin_cmd!("markref");
    cmd.arg("convert").arg("does-not-exist.html");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error reading file 'does-not-exist.html'"));
}
