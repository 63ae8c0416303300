//! Process-level checks against the built `streamdemo` binary.

use std::process::{Command, Output};

fn streamdemo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_streamdemo"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn streamdemo")
}

#[test]
fn successful_run_exits_zero_with_report_on_stdout() {
    let output = streamdemo(&["testA", "5", "3", "2", "2", "4"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "Running test testA on 2 trials each with 5 reps using a source array of 3 elements."
    );
    for line in &lines[1..] {
        let fields: Vec<&str> = line.split(", ").collect();
        assert_eq!(fields[0], "asCollector");
        let numbers: Vec<u64> = fields[1..]
            .iter()
            .map(|f| f.parse().expect("numeric field"))
            .collect();
        assert_eq!(numbers.len(), 5);
        // free never exceeds total for either snapshot
        assert!(numbers[2] <= numbers[1]);
        assert!(numbers[4] <= numbers[3]);
    }

    // Default log level keeps stderr quiet.
    assert!(output.stderr.is_empty());
}

#[test]
fn tracking_allocator_reports_nonzero_heap() {
    let output = streamdemo(&["testB", "10", "50", "1"]);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let line = stdout.lines().nth(1).expect("report line");
    let start_total: u64 = line
        .split(", ")
        .nth(2)
        .and_then(|f| f.parse().ok())
        .expect("start total");
    assert!(start_total > 0);
}

fn labels(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .skip(1)
        .map(|l| l.split(", ").next().unwrap_or_default().to_owned())
        .collect()
}

#[test]
fn unknown_kind_runs_ab_without_stderr_noise() {
    let bogus = streamdemo(&["bogus", "1", "1", "1"]);
    let ab = streamdemo(&["testAB", "1", "1", "1"]);
    assert!(bogus.status.success());
    assert!(
        bogus.stderr.is_empty(),
        "{}",
        String::from_utf8_lossy(&bogus.stderr)
    );
    assert_eq!(labels(&bogus.stdout), ["asCollector", "asForEach"]);
    assert_eq!(labels(&bogus.stdout), labels(&ab.stdout));
}

#[test]
fn non_integer_argument_fails() {
    let output = streamdemo(&["testAB", "lots"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("reps"), "{stderr}");
}
