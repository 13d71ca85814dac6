//! Run summary reporting tests.

use std::path::PathBuf;
use std::time::Duration;

use crate::common::harness::TestBench;
use pretty_assertions::assert_eq;
use tbsim_core::RunSummary;

fn line<'a>(report: &'a str, key: &str) -> Option<&'a str> {
    report
        .lines()
        .find_map(|l| l.strip_prefix(key))
        .map(str::trim)
}

#[test]
fn default_summary_is_empty() {
    let summary = RunSummary::default();
    assert_eq!(summary.steps(), 0);
    assert_eq!(summary.first_time, None);

    let report = summary.to_string();
    assert_eq!(line(&report, "trace.range"), Some("-"));
    assert_eq!(line(&report, "trace.file"), Some("(disabled)"));
}

#[test]
fn report_lists_every_counter() {
    let summary = RunSummary {
        reset_steps: 5,
        run_steps: 195,
        samples: 200,
        first_time: Some(0),
        last_time: Some(995),
        final_time: 1000,
        trace_path: Some(PathBuf::from("waveform.vcd")),
        host_time: Duration::from_millis(1500),
    };
    let report = summary.to_string();

    assert!(report.contains("TESTBENCH RUN SUMMARY"));
    assert_eq!(line(&report, "host_seconds"), Some("1.5000 s"));
    assert_eq!(line(&report, "sim_time"), Some("1000"));
    assert_eq!(line(&report, "steps.reset"), Some("5"));
    assert_eq!(line(&report, "steps.run"), Some("195"));
    assert_eq!(line(&report, "trace.samples"), Some("200"));
    assert_eq!(line(&report, "trace.range"), Some("0..=995"));
    assert_eq!(line(&report, "trace.file"), Some("waveform.vcd"));
}

#[test]
fn driver_summary_matches_run() {
    let (summary, _, recorder) = TestBench::new().run();
    assert_eq!(summary.samples, recorder.samples().len() as u64);
    assert_eq!(summary.steps(), summary.samples);
    assert_eq!(summary.first_time, recorder.samples().first().map(|s| s.time));
    assert_eq!(summary.last_time, recorder.samples().last().map(|s| s.time));
}

#[test]
fn untraced_summary_reports_disabled_file() {
    let (summary, _, _) = TestBench::new().untraced().run();
    let report = summary.to_string();
    assert_eq!(line(&report, "trace.samples"), Some("0"));
    assert_eq!(line(&report, "trace.range"), Some("0..=995"));
    assert_eq!(line(&report, "trace.file"), Some("(disabled)"));
}
