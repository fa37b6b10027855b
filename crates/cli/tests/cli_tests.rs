//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("seoscope")
}

fn get_fixture_path(name: &str) -> String {
    format!("../core/tests/fixtures/{}", name)
}

#[test]
fn test_cli_file_input() {
    cmd()
        .args(["--vitals", &get_fixture_path("vitals_good.json")])
        .arg(get_fixture_path("optimized.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("SEO Audit Report: rust-web-services-guide"))
        .stdout(predicate::str::contains("Score:         100/100 (good)"))
        .stdout(predicate::str::contains("No major SEO issues found."));
}

#[test]
fn test_cli_stdin_input() {
    let json = std::fs::read_to_string(get_fixture_path("draft.json")).unwrap();
    cmd()
        .arg("-")
        .write_stdin(json)
        .assert()
        .success()
        .stdout(predicate::str::contains("draft-notes"))
        .stdout(predicate::str::contains("  - metaDescription"));
}

#[test]
fn test_cli_missing_vitals() {
    cmd()
        .arg(get_fixture_path("optimized.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("93/100"))
        .stdout(predicate::str::contains("Core Web Vitals data unavailable."));
}

#[test]
fn test_cli_inline_vitals() {
    cmd()
        .args(["--lcp", "3000", "--fid", "50", "--cls", "0.05"])
        .arg(get_fixture_path("optimized.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("LCP is too high: 3000ms (>2500ms)."));
}

#[test]
fn test_cli_partial_inline_vitals() {
    cmd()
        .args(["--lcp", "3000", &get_fixture_path("optimized.json")])
        .assert()
        .failure();
}

#[test]
fn test_cli_json_format() {
    let output = cmd()
        .args(["-f", "json", "--vitals", &get_fixture_path("vitals_good.json")])
        .arg(get_fixture_path("optimized.json"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["seoScore"], 100);
    assert_eq!(value["wordCount"], 1858);
    assert_eq!(value["readingTime"], 10);
    assert_eq!(value["missingFields"], serde_json::json!([]));
}

#[test]
fn test_cli_pretty_json() {
    cmd()
        .args(["-f", "json", "--pretty", &get_fixture_path("draft.json")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n"))
        .stdout(predicate::str::contains("\"og:image\""));
}

#[test]
fn test_cli_no_suggestions() {
    cmd()
        .args(["--no-suggestions", &get_fixture_path("draft.json")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Issues Detected"))
        .stdout(predicate::str::contains("Suggestions").not());
}

#[test]
fn test_cli_corpus_duplicate() {
    cmd()
        .args(["--vitals", &get_fixture_path("vitals_good.json")])
        .args(["--corpus", &get_fixture_path("corpus_copy.txt")])
        .arg(get_fixture_path("optimized.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("85/100"))
        .stdout(predicate::str::contains("This content appears to be duplicated."));
}

#[test]
fn test_cli_batch_text() {
    cmd()
        .arg(get_fixture_path("optimized.json"))
        .arg(get_fixture_path("draft.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("SEO Audit Report: rust-web-services-guide"))
        .stdout(predicate::str::contains("SEO Audit Report: draft-notes"))
        .stdout(predicate::str::contains("Average score: 62.0"))
        .stdout(predicate::str::contains("Good/Fair/Poor: 1/0/1"));
}

#[test]
fn test_cli_cross_check_json() {
    let output = cmd()
        .args(["--cross-check", "-f", "json"])
        .arg(get_fixture_path("optimized.json"))
        .arg(get_fixture_path("optimized.json"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let articles = value["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 2);
    for entry in articles {
        assert_eq!(entry["report"]["seoScore"], 78);
        assert_eq!(entry["closestMatch"]["label"], "rust-web-services-guide");
        assert_eq!(entry["closestMatch"]["similarity"], 1.0);
    }
    assert_eq!(value["summary"]["fair"], 2);
}

#[test]
fn test_cli_custom_config() {
    cmd()
        .args(["--config", &get_fixture_path("config.json")])
        .args(["--vitals", &get_fixture_path("vitals_slow.json")])
        .arg(get_fixture_path("optimized.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("88/100"));
}

#[test]
fn test_cli_invalid_config() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("config.json");
    std::fs::write(&config, r#"{"thresholds": {"wordsPerMinute": 0}}"#).unwrap();

    cmd()
        .args(["--config", config.to_str().unwrap()])
        .arg(get_fixture_path("optimized.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn test_cli_fail_under() {
    cmd()
        .args(["--fail-under", "50", &get_fixture_path("draft.json")])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Score below 50 for: draft-notes"));
}

#[test]
fn test_cli_fail_under_passes() {
    cmd()
        .args(["--fail-under", "90", "--vitals", &get_fixture_path("vitals_good.json")])
        .arg(get_fixture_path("optimized.json"))
        .assert()
        .success();
}

#[test]
fn test_cli_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("report.json");

    cmd()
        .args(["-f", "json", "-o", output.to_str().unwrap()])
        .arg(get_fixture_path("draft.json"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&output).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["seoScore"], 31);
}

#[test]
fn test_cli_invalid_file() {
    cmd().arg("nonexistent.json").assert().failure();
}

#[test]
fn test_cli_malformed_article() {
    cmd()
        .arg("-")
        .write_stdin(r#"{"title": ["not", "a", "string"]}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse article from stdin"));
}

#[test]
fn test_cli_invalid_format() {
    cmd()
        .args(["-f", "yaml", &get_fixture_path("draft.json")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn test_cli_verbose() {
    cmd()
        .args(["-v", &get_fixture_path("draft.json")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Seoscope"));
}

#[test]
fn test_cli_completions() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("seoscope"));
}

#[test]
fn test_cli_requires_input() {
    cmd().assert().failure();
}

#[test]
fn test_build_completions_use_hyphenated_flags() {
    let generated = std::fs::read_to_string(concat!(env!("OUT_DIR"), "/completions/seoscope.bash")).unwrap();
    for flag in ["--cross-check", "--fail-under", "--no-suggestions"] {
        assert!(generated.contains(flag), "missing {flag}");
    }
    for flag in ["--cross_check", "--fail_under", "--no_suggestions"] {
        assert!(!generated.contains(flag), "unexpected {flag}");
    }

    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--cross-check"))
        .stdout(predicate::str::contains("--fail-under"));
}
