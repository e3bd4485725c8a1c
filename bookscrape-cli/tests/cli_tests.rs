//! Integration tests for the Bookscrape CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Path to the test files directory
const TEST_FILES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../files");

fn fixture_page() -> String {
    format!("{TEST_FILES_DIR}/amazon_product_page.html")
}

/// Extract the fixture to a record JSON file
fn write_record(dir: &TempDir) -> std::path::PathBuf {
    let output = Command::cargo_bin("bookscrape-cli")
        .unwrap()
        .args(["extract", &fixture_page(), "--isbn", "9788535931006", "--json"])
        .output()
        .expect("Failed to run extract");
    assert!(output.status.success());

    let path = dir.path().join("record.json");
    fs::write(&path, output.stdout).expect("Failed to write record");
    path
}

#[test]
fn test_help() {
    let mut cmd = Command::cargo_bin("bookscrape-cli").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("code"))
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("lookup"))
        .stdout(predicate::str::contains("opf"));
}

#[test]
fn test_version() {
    let mut cmd = Command::cargo_bin("bookscrape-cli").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookscrape"));
}

#[test]
fn test_lookup_help() {
    let mut cmd = Command::cargo_bin("bookscrape-cli").unwrap();
    cmd.args(["lookup", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--token"))
        .stdout(predicate::str::contains("BROWSERLESS_TOKEN"));
}

#[test]
fn test_code_converts_isbn10() {
    let mut cmd = Command::cargo_bin("bookscrape-cli").unwrap();
    cmd.args(["code", "--isbn", "85-359-3100-4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ISBN-13 9788535931006"));
}

#[test]
fn test_code_prefers_asin() {
    let mut cmd = Command::cargo_bin("bookscrape-cli").unwrap();
    cmd.args(["code", "--asin", "B083G6VYBZ", "--isbn", "8535931004"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ASIN B083G6VYBZ"));
}

#[test]
fn test_code_missing() {
    let mut cmd = Command::cargo_bin("bookscrape-cli").unwrap();
    cmd.arg("code")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ASIN or ISBN-13 codes are mandatory"));
}

#[test]
fn test_code_invalid_asin() {
    let mut cmd = Command::cargo_bin("bookscrape-cli").unwrap();
    cmd.args(["code", "--asin", "X083G6VYBZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("X083G6VYBZ"));
}

#[test]
fn test_extract_fixture() {
    let mut cmd = Command::cargo_bin("bookscrape-cli").unwrap();
    cmd.args(["extract", &fixture_page(), "--asin", "B083G6VYBZ"])
        .assert()
        .success()
        .stdout(predicate::str::contains("O cheiro do ralo"))
        .stdout(predicate::str::contains("Lourenço Mutarelli"))
        .stdout(predicate::str::contains("2019-11-01"))
        .stdout(predicate::str::contains("pt-BR"));
}

#[test]
fn test_extract_json() {
    let output = Command::cargo_bin("bookscrape-cli")
        .unwrap()
        .args(["extract", &fixture_page(), "--asin", "B083G6VYBZ", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["publisher"], "Companhia das Letras");
    assert_eq!(record["asin"], "B083G6VYBZ");
    assert_eq!(record["isbn13"], "");
}

#[test]
fn test_extract_missing_field() {
    let temp_dir = TempDir::new().unwrap();
    let page = temp_dir.path().join("empty.html");
    fs::write(&page, "<html><body><p>nothing here</p></body></html>").unwrap();

    let mut cmd = Command::cargo_bin("bookscrape-cli").unwrap();
    cmd.args(["extract", page.to_str().unwrap(), "--asin", "B083G6VYBZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("field not found: title"));
}

#[test]
fn test_extract_nonexistent_file() {
    let mut cmd = Command::cargo_bin("bookscrape-cli").unwrap();
    cmd.args(["extract", "/nonexistent/page.html", "--asin", "B083G6VYBZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read input file"));
}

#[test]
fn test_opf_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let record = write_record(&temp_dir);

    let mut cmd = Command::cargo_bin("bookscrape-cli").unwrap();
    cmd.args(["opf", record.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"version="3.0""#))
        .stdout(predicate::str::contains("urn:isbn:9788535931006"))
        .stdout(predicate::str::contains("dcterms:modified"));
}

#[test]
fn test_opf_to_file_with_translator() {
    let temp_dir = TempDir::new().unwrap();
    let record = write_record(&temp_dir);
    let output = temp_dir.path().join("content.opf");

    let mut cmd = Command::cargo_bin("bookscrape-cli").unwrap();
    cmd.args([
        "opf",
        record.to_str().unwrap(),
        "--package-version",
        "2.0",
        "--translator",
        "Jane Doe",
        "--output",
        output.to_str().unwrap(),
    ])
    .assert()
    .success();

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.contains(r#"version="2.0""#));
    assert!(xml.contains(r#"<dc:contributor id="contributor01">Jane Doe</dc:contributor>"#));
    assert!(xml.contains(r##"refines="#contributor01""##));
    assert!(!xml.contains("dcterms:modified"));
}

#[test]
fn test_opf_unsupported_version() {
    let temp_dir = TempDir::new().unwrap();
    let record = write_record(&temp_dir);

    let mut cmd = Command::cargo_bin("bookscrape-cli").unwrap();
    cmd.args(["opf", record.to_str().unwrap(), "--package-version", "4.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported package version"));
}

#[test]
fn test_opf_invalid_record() {
    let temp_dir = TempDir::new().unwrap();
    let record = temp_dir.path().join("record.json");
    fs::write(&record, r#"{"title": ""}"#).unwrap();

    let mut cmd = Command::cargo_bin("bookscrape-cli").unwrap();
    cmd.args(["opf", record.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid record"));
}
