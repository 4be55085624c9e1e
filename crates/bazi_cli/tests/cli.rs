//! End-to-end runs of the `bazi` binary.

use std::process::{Command, Output};

fn bazi(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bazi"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("binary runs")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

#[test]
fn relations_text() {
    let out = bazi(&["relations", "甲子甲午甲卯甲酉"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("年支子与月支午相冲"));
    assert!(text.contains("日支卯与时支酉相冲"));
}

#[test]
fn bureau_and_ziwei() {
    let out = bazi(&["bureau", "甲", "寅", "--day", "1"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.contains("火六局"));
    assert!(text.contains("紫微在酉"));

    let out = bazi(&["ziwei", "--bureau", "2", "--day", "30"]);
    assert_eq!(stdout(&out).trim(), "紫微在辰");
}

#[test]
fn english_locale() {
    let out = bazi(&["--locale", "en", "ziwei", "--bureau", "2", "--day", "30"]);
    assert_eq!(stdout(&out).trim(), "Ziwei in Chen");
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[test]
fn luck_json() {
    let out = bazi(&[
        "--json",
        "luck",
        "甲子丙寅甲午甲子",
        "--gender",
        "male",
        "--birth-year",
        "1984",
        "--start-age",
        "3",
    ]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let cycles = v.as_array().unwrap();
    assert_eq!(cycles.len(), 8);
    assert_eq!(cycles[0]["ganzhi"], "丁卯");
    assert_eq!(cycles[0]["startYear"], 1987);
    assert_eq!(cycles[0]["strength"], 75);
}

#[test]
fn hours_json() {
    let out = bazi(&["--json", "hours", "庚", "--branch", "午"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v, serde_json::json!(["壬午"]));

    let out = bazi(&["--json", "hours", "甲"]);
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 12);
    assert_eq!(v[0], "甲子");
}

#[test]
fn luck_transitions_json() {
    let out = bazi(&[
        "--json",
        "luck",
        "甲子丙寅甲午甲子",
        "--gender",
        "male",
        "--birth-year",
        "1984",
        "--start-age",
        "3",
        "--transitions",
    ]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let transitions = v.as_array().unwrap();
    assert_eq!(transitions.len(), 7);
    assert_eq!(transitions[0]["age"], 13);
    assert_eq!(transitions[2]["significance"], "major");
}

#[test]
fn tiger_json() {
    let out = bazi(&["--json", "tiger", "戊", "--branch", "寅"]);
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v, serde_json::json!(["甲寅"]));
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn bad_day_fails() {
    let out = bazi(&["ziwei", "--bureau", "2", "--day", "31"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("31"));
}

#[test]
fn luck_bounds_fail_cleanly() {
    let base = [
        "luck",
        "甲子丙寅甲午甲子",
        "--gender",
        "male",
        "--birth-year",
        "1984",
    ];
    let out = bazi(&[&base[..], &["--start-age", "4294967290"][..]].concat());
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("start age 4294967290"));

    let out = bazi(&[&base[..], &["--start-age", "3", "--count", "300"][..]].concat());
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("cycle count 300"));
}

#[test]
fn mismatched_chart_fails() {
    let out = bazi(&["chart", "甲丑丙寅甲午甲子"]);
    assert!(!out.status.success());
}

#[test]
fn missing_explicit_config_fails() {
    let out = bazi(&["--config", "/nonexistent/bazi.toml", "tiger", "甲"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("failed to read"));
}
