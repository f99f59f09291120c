use std::fs;
use std::path::Path;

use assert_cmd::Command;

fn write_plate_csv(path: &Path, block: [[&str; 3]; 8]) {
    let mut lines = vec![
        "Thermostability assay,,,,".to_string(),
        "variant,BglB WT,,,".to_string(),
        ",,,,".to_string(),
        "T (C),,rep1,rep2,rep3".to_string(),
    ];
    for (i, reps) in block.iter().enumerate() {
        lines.push(format!("{},,{},{},{}", 30 + 5 * i, reps[0], reps[1], reps[2]));
    }
    fs::write(path, lines.join("\n")).unwrap();
}

#[test]
fn run_writes_sanitized_csv_and_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("plate.csv");
    let out = dir.path().join("out");
    write_plate_csv(&input, [["5.0", "5.0", "5.0"]; 8]);

    let mut cmd = Command::cargo_bin("thermoqc").unwrap();
    cmd.arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(&out)
        .arg("--json");
    cmd.assert().success();

    assert!(out.join("sanitized.csv").exists());
    let report = fs::read_to_string(out.join("thermoqc.json")).unwrap();
    assert!(report.contains("\"schema_version\": \"v1\""));
    assert!(report.contains("\"messages\""));
}

#[test]
fn check_passes_on_clean_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("plate.csv");
    write_plate_csv(&input, [["5.0", "5.0", "5.0"]; 8]);

    let mut cmd = Command::cargo_bin("thermoqc").unwrap();
    cmd.arg("check").arg("--input").arg(&input);
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("thermoqc check ok"));
}

#[test]
fn check_fails_on_blocking_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("plate.csv");
    let mut block = [["10.0", "10.0", "10.0"]; 8];
    for row in block.iter_mut().skip(5) {
        *row = ["5.0", "5.0", "5.0"];
    }
    write_plate_csv(&input, block);

    let mut cmd = Command::cargo_bin("thermoqc").unwrap();
    cmd.arg("check").arg("--input").arg(&input);
    cmd.assert()
        .failure()
        .stdout(predicates::str::contains("Error: Row F"));
}

#[test]
fn run_rejects_short_table() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("short.csv");
    fs::write(&input, "a,b\nc,d\n").unwrap();

    let mut cmd = Command::cargo_bin("thermoqc").unwrap();
    cmd.arg("run")
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(dir.path().join("out"));
    cmd.assert().failure();
}
