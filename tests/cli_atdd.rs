#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SON_BUNYOLA: &str = "Son Bunyola is a boutique hotel in Mallorca, Spain, with 23 suites from €450 per night, opening March 2026.";
const PRESTIGE: &str = "This is the world's most iconic luxury escape.";
const VILLA_JUNE: &str = "Our villa is perfect for families and opens in June.";

fn readiness(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("readiness").expect("binary should compile");
    cmd.env("HOME", home.path())
        .env_remove("RUST_LOG")
        .current_dir(home.path());
    cmd
}

#[test]
fn score_prints_text_report_for_inline_copy() {
    let home = TempDir::new().expect("temp dir should be created");
    readiness(&home)
        .args(["score", "--text", SON_BUNYOLA])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Score: 6.0/10"))
        .stdout(predicate::str::contains("Band: Extractable with Gaps"))
        .stdout(predicate::str::contains("(-0.2)"))
        .stdout(predicate::str::contains("Input fingerprint: sha256:"));
}

#[test]
fn score_reads_stdin_when_no_input_given() {
    let home = TempDir::new().expect("temp dir should be created");
    readiness(&home)
        .args(["score", "--format", "json"])
        .write_stdin(PRESTIGE)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"band\": \"Hard to Extract\""))
        .stdout(predicate::str::contains("trust.unsupported_superlatives"));
}

#[test]
fn empty_input_is_not_an_error() {
    let home = TempDir::new().expect("temp dir should be created");
    readiness(&home)
        .args(["score", "-"])
        .write_stdin("   \n  ")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("no result: input is empty"));
}

#[test]
fn score_exports_report_to_file() {
    let home = TempDir::new().expect("temp dir should be created");
    let copy = home.path().join("copy.txt");
    let out = home.path().join("report.txt");
    fs::write(&copy, SON_BUNYOLA).expect("copy should write");

    readiness(&home)
        .arg("score")
        .arg(&copy)
        .arg("--output")
        .arg(&out)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("report written to"));

    let report = fs::read_to_string(&out).expect("report should exist");
    assert!(report.starts_with("ANSWER ENGINE READINESS REPORT"));
    assert!(report.contains("Quick wins"));
}

#[test]
fn fail_under_blocks_low_scores() {
    let home = TempDir::new().expect("temp dir should be created");
    readiness(&home)
        .args(["score", "--text", PRESTIGE, "--fail-under", "5"])
        .assert()
        .code(2);
}

#[test]
fn gaps_reports_month_without_year() {
    let home = TempDir::new().expect("temp dir should be created");
    readiness(&home)
        .args(["gaps", "--text", VILLA_JUNE])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("gaps: showing 6 of"))
        .stdout(predicate::str::contains("[The Lead]"));
}

#[test]
fn suggest_lists_quick_wins() {
    let home = TempDir::new().expect("temp dir should be created");
    readiness(&home)
        .args(["suggest", "--text", VILLA_JUNE])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("quick wins:"))
        .stdout(predicate::str::contains("[fix.add_year]"));
}

#[test]
fn project_config_changes_limits() {
    let home = TempDir::new().expect("temp dir should be created");
    fs::write(
        home.path().join("readiness.toml"),
        r#"
[analyzer]
max_input_chars = 10
"#,
    )
    .expect("config should write");

    readiness(&home)
        .args(["score", "--text", SON_BUNYOLA])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn truncation_mode_scores_the_prefix() {
    let home = TempDir::new().expect("temp dir should be created");
    let config = home.path().join("short.toml");
    fs::write(
        &config,
        r#"
[analyzer]
max_input_chars = 20
on_oversize = "truncate"
"#,
    )
    .expect("config should write");

    readiness(&home)
        .arg("--config")
        .arg(&config)
        .args(["score", "--format", "json", "--text", SON_BUNYOLA])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"lead\": \"Son Bunyola is a bou\""));
}

#[test]
fn invalid_config_exits_with_code_3() {
    let home = TempDir::new().expect("temp dir should be created");
    fs::write(
        home.path().join("readiness.toml"),
        r#"
[quotable]
min_chars = 300
"#,
    )
    .expect("config should write");

    readiness(&home)
        .args(["score", "--text", SON_BUNYOLA])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("quotable.min_chars"));
}

#[test]
fn batch_scores_each_copy_file() {
    let home = TempDir::new().expect("temp dir should be created");
    let drafts = home.path().join("drafts");
    fs::create_dir_all(&drafts).expect("drafts dir should create");
    fs::write(drafts.join("a.txt"), SON_BUNYOLA).expect("a should write");
    fs::write(drafts.join("b.md"), PRESTIGE).expect("b should write");
    fs::write(drafts.join("c.txt"), "").expect("c should write");
    fs::write(drafts.join("notes.json"), "{}").expect("json should write");

    readiness(&home)
        .arg("batch")
        .arg(&drafts)
        .args(["--fail-under", "3"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains(" 6.0  Extractable with Gaps"))
        .stdout(predicate::str::contains(" 0.0  Hard to Extract"))
        .stdout(predicate::str::contains("empty"))
        .stdout(predicate::str::contains("notes.json").not());
}

#[test]
fn batch_keeps_scoring_after_an_unreadable_file() {
    let home = TempDir::new().expect("temp dir should be created");
    let drafts = home.path().join("drafts");
    fs::create_dir_all(&drafts).expect("drafts dir should create");
    fs::write(drafts.join("a.txt"), SON_BUNYOLA).expect("a should write");
    fs::write(drafts.join("b.txt"), [0xff, 0xfe, 0x41]).expect("b should write");
    fs::write(drafts.join("c.txt"), PRESTIGE).expect("c should write");

    readiness(&home)
        .arg("batch")
        .arg(&drafts)
        .assert()
        .code(3)
        .stdout(predicate::str::contains(" 6.0  Extractable with Gaps"))
        .stdout(
            predicate::str::is_match(r"error\s+io error: .*b\.txt")
                .expect("regex should compile"),
        )
        .stdout(predicate::str::contains(" 0.0  Hard to Extract"))
        .stdout(predicate::str::contains("c.txt"));
}
